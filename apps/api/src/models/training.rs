use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Derived compliance status of a training record. Never persisted — the
/// classifier recomputes it from `expiry_date` on every read, so a record
/// crossing a day boundary changes status without any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    Valid,
    #[serde(rename = "Due Soon")]
    DueSoon,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrainingRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_name: String,
    pub provider: String,
    pub date_completed: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub category: String,
    pub linked_doc_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A training record as returned to callers: the stored row plus the status
/// derived for the reference date of the request.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingRecordView {
    #[serde(flatten)]
    pub record: TrainingRecordRow,
    pub status: TrainingStatus,
}
