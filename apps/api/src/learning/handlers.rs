use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::compliance::revalidation::{revalidation_readiness, RevalidationReadiness};
use crate::errors::AppError;
use crate::learning::validation::{validate_cpd_hours, validate_reflection_content};
use crate::models::cpd::CpdEntryRow;
use crate::models::recommendation::{RecommendationKind, RecommendationRow, RecommendationStatus};
use crate::models::reflection::{CodeTheme, ReflectionMethod, ReflectionRow};
use crate::models::voice::{SuggestedEntryKind, VoiceLogRow, VoiceLogStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// CPD entries
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cpd
pub async fn handle_list_cpd(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CpdEntryRow>>, AppError> {
    Ok(Json(fetch_cpd(&state, params.user_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct NewCpdEntry {
    pub user_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub participatory: bool,
    #[serde(default)]
    pub reflection: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub evidence_url: Option<String>,
}

/// POST /api/v1/cpd
pub async fn handle_add_cpd(
    State(state): State<AppState>,
    Json(request): Json<NewCpdEntry>,
) -> Result<Json<CpdEntryRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    validate_cpd_hours(request.hours).map_err(AppError::Validation)?;

    let entry = sqlx::query_as::<_, CpdEntryRow>(
        r#"
        INSERT INTO cpd_entries
            (user_id, title, date, hours, participatory, reflection, category,
             tags, evidence_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.title)
    .bind(request.date)
    .bind(request.hours)
    .bind(request.participatory)
    .bind(&request.reflection)
    .bind(&request.category)
    .bind(&request.tags)
    .bind(&request.evidence_url)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

// ────────────────────────────────────────────────────────────────────────────
// Reflections & revalidation
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/reflections
pub async fn handle_list_reflections(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ReflectionRow>>, AppError> {
    Ok(Json(fetch_reflections(&state, params.user_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct NewReflection {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub nmc_question1: Option<String>,
    pub nmc_question2: Option<String>,
    pub nmc_question3: Option<String>,
    pub nmc_question4: Option<String>,
    #[serde(default)]
    pub code_themes: Vec<CodeTheme>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub method: ReflectionMethod,
}

/// POST /api/v1/reflections
pub async fn handle_add_reflection(
    State(state): State<AppState>,
    Json(request): Json<NewReflection>,
) -> Result<Json<ReflectionRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    validate_reflection_content(
        &request.content,
        [
            request.nmc_question1.as_deref(),
            request.nmc_question2.as_deref(),
            request.nmc_question3.as_deref(),
            request.nmc_question4.as_deref(),
        ],
        request.code_themes.len(),
    )
    .map_err(AppError::Validation)?;

    let reflection = sqlx::query_as::<_, ReflectionRow>(
        r#"
        INSERT INTO reflections
            (user_id, date, title, content, nmc_question1, nmc_question2,
             nmc_question3, nmc_question4, code_themes, tags, method)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.date)
    .bind(&request.title)
    .bind(&request.content)
    .bind(&request.nmc_question1)
    .bind(&request.nmc_question2)
    .bind(&request.nmc_question3)
    .bind(&request.nmc_question4)
    .bind(&request.code_themes)
    .bind(&request.tags)
    .bind(request.method)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(reflection))
}

/// GET /api/v1/revalidation
///
/// Readiness is recomputed from the latest CPD and reflection rows on every
/// call; it is never stored.
pub async fn handle_revalidation(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RevalidationReadiness>, AppError> {
    let cpd = fetch_cpd(&state, params.user_id).await?;
    let reflections = fetch_reflections(&state, params.user_id).await?;

    Ok(Json(revalidation_readiness(&cpd, &reflections)))
}

// ────────────────────────────────────────────────────────────────────────────
// Voice logs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/voice-logs
pub async fn handle_list_voice_logs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<VoiceLogRow>>, AppError> {
    let logs = sqlx::query_as::<_, VoiceLogRow>(
        "SELECT * FROM voice_logs WHERE user_id = $1 ORDER BY date DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(logs))
}

#[derive(Debug, Deserialize)]
pub struct NewVoiceLog {
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub duration_seconds: i32,
    pub title: Option<String>,
    pub transcription: String,
    pub status: VoiceLogStatus,
    pub suggested_kind: Option<SuggestedEntryKind>,
}

/// POST /api/v1/voice-logs
pub async fn handle_add_voice_log(
    State(state): State<AppState>,
    Json(request): Json<NewVoiceLog>,
) -> Result<Json<VoiceLogRow>, AppError> {
    let log = sqlx::query_as::<_, VoiceLogRow>(
        r#"
        INSERT INTO voice_logs
            (user_id, date, duration_seconds, title, transcription, status,
             suggested_kind)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.date)
    .bind(request.duration_seconds)
    .bind(&request.title)
    .bind(&request.transcription)
    .bind(request.status)
    .bind(request.suggested_kind)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(log))
}

#[derive(Debug, Deserialize)]
pub struct UpdateVoiceLog {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub transcription: Option<String>,
    pub status: Option<VoiceLogStatus>,
    pub suggested_kind: Option<SuggestedEntryKind>,
}

/// PATCH /api/v1/voice-logs/:id
///
/// Partial update — absent fields keep their stored values.
pub async fn handle_update_voice_log(
    State(state): State<AppState>,
    Path(log_id): Path<Uuid>,
    Json(request): Json<UpdateVoiceLog>,
) -> Result<Json<VoiceLogRow>, AppError> {
    let log = sqlx::query_as::<_, VoiceLogRow>(
        r#"
        UPDATE voice_logs SET
            title = COALESCE($3, title),
            transcription = COALESCE($4, transcription),
            status = COALESCE($5, status),
            suggested_kind = COALESCE($6, suggested_kind)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(log_id)
    .bind(request.user_id)
    .bind(&request.title)
    .bind(&request.transcription)
    .bind(request.status)
    .bind(request.suggested_kind)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Voice log {log_id} not found")))?;

    Ok(Json(log))
}

/// DELETE /api/v1/voice-logs/:id
///
/// Voice logs are the only entity with a hard delete.
pub async fn handle_delete_voice_log(
    State(state): State<AppState>,
    Path(log_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM voice_logs WHERE id = $1 AND user_id = $2")
        .bind(log_id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Voice log {log_id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<RecommendationRow>>, AppError> {
    let recommendations = sqlx::query_as::<_, RecommendationRow>(
        "SELECT * FROM recommendations WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(recommendations))
}

#[derive(Debug, Deserialize)]
pub struct NewRecommendation {
    pub user_id: Uuid,
    pub title: String,
    pub kind: RecommendationKind,
    pub reason: String,
    pub provider: Option<String>,
    pub estimated_hours: Option<f64>,
}

/// POST /api/v1/recommendations
///
/// Persists a recommendation the user wants to keep — typically one picked
/// from the AI assist suggestions. Always starts Pending.
pub async fn handle_add_recommendation(
    State(state): State<AppState>,
    Json(request): Json<NewRecommendation>,
) -> Result<Json<RecommendationRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let recommendation = sqlx::query_as::<_, RecommendationRow>(
        r#"
        INSERT INTO recommendations
            (user_id, title, kind, reason, status, provider, estimated_hours)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.title)
    .bind(request.kind)
    .bind(&request.reason)
    .bind(RecommendationStatus::Pending)
    .bind(&request.provider)
    .bind(request.estimated_hours)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(recommendation))
}

/// POST /api/v1/recommendations/:id/complete
pub async fn handle_complete_recommendation(
    State(state): State<AppState>,
    Path(recommendation_id): Path<Uuid>,
    Json(request): Json<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query(
        "UPDATE recommendations SET status = $3 WHERE id = $1 AND user_id = $2",
    )
    .bind(recommendation_id)
    .bind(request.user_id)
    .bind(RecommendationStatus::Completed)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Recommendation {recommendation_id} not found"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn fetch_cpd(state: &AppState, user_id: Uuid) -> Result<Vec<CpdEntryRow>, AppError> {
    Ok(sqlx::query_as::<_, CpdEntryRow>(
        "SELECT * FROM cpd_entries WHERE user_id = $1 ORDER BY date DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?)
}

async fn fetch_reflections(
    state: &AppState,
    user_id: Uuid,
) -> Result<Vec<ReflectionRow>, AppError> {
    Ok(sqlx::query_as::<_, ReflectionRow>(
        "SELECT * FROM reflections WHERE user_id = $1 ORDER BY date DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?)
}
