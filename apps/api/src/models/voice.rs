use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "voice_log_status", rename_all = "snake_case")]
pub enum VoiceLogStatus {
    Draft,
    Processed,
}

/// Where a transcription most likely belongs, as suggested by the AI
/// assist. The user decides; this is never applied automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "suggested_entry_kind", rename_all = "snake_case")]
pub enum SuggestedEntryKind {
    #[serde(rename = "CPD")]
    Cpd,
    Reflection,
    Competency,
}

/// A dictated note. The only entity with an explicit hard delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VoiceLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub duration_seconds: i32,
    pub title: Option<String>,
    pub transcription: String,
    pub status: VoiceLogStatus,
    pub suggested_kind: Option<SuggestedEntryKind>,
    pub created_at: DateTime<Utc>,
}
