use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compliance::report::{compliance_report, ComplianceReport};
use crate::compliance::status::classify;
use crate::errors::AppError;
use crate::models::training::{TrainingRecordRow, TrainingRecordView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct TrainingListResponse {
    pub records: Vec<TrainingRecordView>,
    pub summary: ComplianceReport,
}

/// GET /api/v1/training
///
/// Every record carries a status derived against today's date — nothing is
/// read from storage besides the raw rows, so a record that expired
/// overnight shows Expired without any write having happened.
pub async fn handle_list_training(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<TrainingListResponse>, AppError> {
    let rows = fetch_training(&state, params.user_id).await?;
    let today = Utc::now().date_naive();

    let summary = compliance_report(&rows, today);
    let records = rows
        .into_iter()
        .map(|record| {
            let status = classify(record.expiry_date, today);
            TrainingRecordView { record, status }
        })
        .collect();

    Ok(Json(TrainingListResponse { records, summary }))
}

/// GET /api/v1/training/summary
pub async fn handle_training_summary(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ComplianceReport>, AppError> {
    let rows = fetch_training(&state, params.user_id).await?;
    Ok(Json(compliance_report(&rows, Utc::now().date_naive())))
}

#[derive(Debug, Deserialize)]
pub struct NewTrainingRecord {
    pub user_id: Uuid,
    pub course_name: String,
    pub provider: String,
    pub date_completed: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub category: String,
    pub linked_doc_id: Option<Uuid>,
}

/// POST /api/v1/training
pub async fn handle_add_training(
    State(state): State<AppState>,
    Json(request): Json<NewTrainingRecord>,
) -> Result<Json<TrainingRecordView>, AppError> {
    if request.course_name.trim().is_empty() {
        return Err(AppError::Validation("course_name cannot be empty".to_string()));
    }
    if request.provider.trim().is_empty() {
        return Err(AppError::Validation("provider cannot be empty".to_string()));
    }

    let record = sqlx::query_as::<_, TrainingRecordRow>(
        r#"
        INSERT INTO training_records
            (user_id, course_name, provider, date_completed, expiry_date,
             category, linked_doc_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.course_name)
    .bind(&request.provider)
    .bind(request.date_completed)
    .bind(request.expiry_date)
    .bind(&request.category)
    .bind(request.linked_doc_id)
    .fetch_one(&state.db)
    .await?;

    let status = classify(record.expiry_date, Utc::now().date_naive());
    Ok(Json(TrainingRecordView { record, status }))
}

async fn fetch_training(
    state: &AppState,
    user_id: Uuid,
) -> Result<Vec<TrainingRecordRow>, AppError> {
    Ok(sqlx::query_as::<_, TrainingRecordRow>(
        "SELECT * FROM training_records WHERE user_id = $1 ORDER BY date_completed DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?)
}
