use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "reflection_method", rename_all = "snake_case")]
pub enum ReflectionMethod {
    Written,
    Voice,
}

/// The four themes of the NMC Code. A structured reflection selects at
/// least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "code_theme", rename_all = "snake_case")]
pub enum CodeTheme {
    #[serde(rename = "Prioritise people")]
    PrioritisePeople,
    #[serde(rename = "Practise effectively")]
    PractiseEffectively,
    #[serde(rename = "Preserve safety")]
    PreserveSafety,
    #[serde(rename = "Promote professionalism and trust")]
    PromoteProfessionalism,
}

impl sqlx::postgres::PgHasArrayType for CodeTheme {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_code_theme")
    }
}

/// A reflective account. Either the legacy free-text `content` is set, or
/// all four NMC question answers plus at least one Code theme are — the
/// boundary validator enforces this, existing rows may carry both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReflectionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub nmc_question1: Option<String>,
    pub nmc_question2: Option<String>,
    pub nmc_question3: Option<String>,
    pub nmc_question4: Option<String>,
    pub code_themes: Vec<CodeTheme>,
    pub tags: Vec<String>,
    pub method: ReflectionMethod,
    pub created_at: DateTime<Utc>,
}
