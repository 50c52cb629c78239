use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per user, keyed by the auth provider's user id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub current_role: String,
    pub current_band: String,
    pub nmc_pin: Option<String>,
    pub revalidation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
