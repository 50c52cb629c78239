use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "requirement_status", rename_all = "snake_case")]
pub enum RequirementStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl RequirementStatus {
    /// The requirement-toggle cycle: Not Started → In Progress → Done →
    /// Not Started. Fully cyclic, no guards.
    pub fn advance(self) -> Self {
        match self {
            RequirementStatus::NotStarted => RequirementStatus::InProgress,
            RequirementStatus::InProgress => RequirementStatus::Done,
            RequirementStatus::Done => RequirementStatus::NotStarted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "requirement_kind", rename_all = "snake_case")]
pub enum RequirementKind {
    Qualification,
    Experience,
    Competency,
    #[serde(rename = "CPD")]
    Cpd,
}

/// One career path per user, from current band to target band.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPathRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_band: String,
    pub target_band: String,
    pub specialty: String,
    pub current_salary: Option<f64>,
    pub target_salary: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRequirementRow {
    pub id: Uuid,
    pub career_path_id: Uuid,
    pub title: String,
    pub kind: RequirementKind,
    pub status: RequirementStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
