use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vault document categories. Mirrors the checklist an NHS employer or
/// agency asks for during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "doc_category", rename_all = "snake_case")]
pub enum DocCategory {
    #[serde(rename = "ID & Right to Work")]
    IdRightToWork,
    #[serde(rename = "NMC Registration")]
    NmcRegistration,
    #[serde(rename = "DBS & Background")]
    DbsChecks,
    #[serde(rename = "Qualifications")]
    Qualifications,
    #[serde(rename = "Mandatory Training")]
    MandatoryTraining,
    #[serde(rename = "Immunisations")]
    Immunisations,
    #[serde(rename = "CV & References")]
    CvReferences,
    #[serde(rename = "Other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "file_kind", rename_all = "snake_case")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Jpg,
    Png,
}

impl FileKind {
    /// Maps an uploaded content type onto a stored kind. Anything that is
    /// neither PDF nor PNG is treated as JPEG.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.contains("pdf") {
            FileKind::Pdf
        } else if content_type.contains("png") {
            FileKind::Png
        } else {
            FileKind::Jpg
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub category: DocCategory,
    pub upload_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub file_kind: FileKind,
    pub size_bytes: i64,
    pub tags: Vec<String>,
    pub storage_path: String,
    pub created_at: DateTime<Utc>,
}
