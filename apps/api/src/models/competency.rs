use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "competency_status", rename_all = "snake_case")]
pub enum CompetencyStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Signed Off")]
    SignedOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "competency_category", rename_all = "snake_case")]
pub enum CompetencyCategory {
    Clinical,
    Leadership,
    Communication,
    Digital,
    Other,
}

/// A tracked clinical/professional skill. Assessor fields stay optional for
/// every status: a sign-off without assessor metadata is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompetencyRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_name: String,
    pub category: CompetencyCategory,
    pub status: CompetencyStatus,
    pub date_assessed: Option<NaiveDate>,
    pub assessor_name: Option<String>,
    pub assessor_role: Option<String>,
    pub setting: Option<String>,
    pub notes: Option<String>,
    pub evidence_voice_log_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
