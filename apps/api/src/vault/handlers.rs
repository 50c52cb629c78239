use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocCategory, DocumentRow, FileKind};
use crate::state::AppState;
use crate::vault::storage;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// The `metadata` part of an upload request, sent as a JSON field alongside
/// the file part.
#[derive(Debug, Deserialize)]
pub struct DocumentMetadata {
    pub user_id: Uuid,
    pub title: String,
    pub category: DocCategory,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// GET /api/v1/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<DocumentRow>>, AppError> {
    let documents = sqlx::query_as::<_, DocumentRow>(
        "SELECT * FROM documents WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(documents))
}

/// POST /api/v1/documents
///
/// Multipart upload: a `metadata` JSON field plus a `file` field. The object
/// is uploaded first; if the metadata insert then fails, the orphaned object
/// is removed before the error is returned.
pub async fn handle_upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentRow>, AppError> {
    let mut metadata: Option<DocumentMetadata> = None;
    let mut file: Option<(String, String, Bytes)> = None; // (filename, content_type, data)

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("metadata") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable metadata: {e}")))?;
                metadata = Some(
                    serde_json::from_str(&raw)
                        .map_err(|e| AppError::Validation(format!("Invalid metadata: {e}")))?,
                );
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .unwrap_or("document")
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file: {e}")))?;
                file = Some((filename, content_type, data));
            }
            _ => {}
        }
    }

    let metadata =
        metadata.ok_or_else(|| AppError::Validation("Missing metadata field".to_string()))?;
    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::Validation("Missing file field".to_string()))?;

    if metadata.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if data.is_empty() {
        return Err(AppError::Validation("file cannot be empty".to_string()));
    }

    let file_kind = FileKind::from_content_type(&content_type);
    let size_bytes = data.len() as i64;
    let now = Utc::now();
    let key = storage::object_key(metadata.user_id, now.timestamp_millis(), &filename);

    storage::upload_object(&state.s3, &state.config.s3_bucket, &key, &content_type, data).await?;

    let inserted = sqlx::query_as::<_, DocumentRow>(
        r#"
        INSERT INTO documents
            (user_id, title, category, upload_date, expiry_date, file_kind,
             size_bytes, tags, storage_path)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(metadata.user_id)
    .bind(&metadata.title)
    .bind(metadata.category)
    .bind(now.date_naive())
    .bind(metadata.expiry_date)
    .bind(file_kind)
    .bind(size_bytes)
    .bind(&metadata.tags)
    .bind(&key)
    .fetch_one(&state.db)
    .await;

    match inserted {
        Ok(document) => Ok(Json(document)),
        Err(e) => {
            // Don't leave an orphaned object behind the failed row.
            storage::delete_object(&state.s3, &state.config.s3_bucket, &key).await;
            Err(e.into())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentUrlResponse {
    pub url: String,
    pub expires_in_secs: u64,
}

/// GET /api/v1/documents/:id/url
///
/// Mints a short-lived presigned download URL for one of the caller's
/// documents.
pub async fn handle_document_url(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DocumentUrlResponse>, AppError> {
    let document = sqlx::query_as::<_, DocumentRow>(
        "SELECT * FROM documents WHERE id = $1 AND user_id = $2",
    )
    .bind(document_id)
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Document {document_id} not found")))?;

    let url = storage::presigned_download_url(
        &state.s3,
        &state.config.s3_bucket,
        &document.storage_path,
    )
    .await?;

    Ok(Json(DocumentUrlResponse {
        url,
        expires_in_secs: storage::DOWNLOAD_URL_TTL_SECS,
    }))
}
