use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "recommendation_kind", rename_all = "snake_case")]
pub enum RecommendationKind {
    Course,
    Module,
    Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "recommendation_status", rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub kind: RecommendationKind,
    pub reason: String,
    pub status: RecommendationStatus,
    pub provider: Option<String>,
    pub estimated_hours: Option<f64>,
    pub created_at: DateTime<Utc>,
}
