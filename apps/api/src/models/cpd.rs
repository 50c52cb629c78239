use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A logged CPD activity. `hours` is validated strictly positive at the
/// boundary; `participatory` marks interactive/group learning, which has its
/// own revalidation threshold.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CpdEntryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub participatory: bool,
    pub reflection: String,
    pub category: String,
    pub tags: Vec<String>,
    pub evidence_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
