use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::competency::{CompetencyCategory, CompetencyRow, CompetencyStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/competencies
pub async fn handle_list_competencies(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CompetencyRow>>, AppError> {
    let competencies = sqlx::query_as::<_, CompetencyRow>(
        "SELECT * FROM competencies WHERE user_id = $1 ORDER BY date_assessed DESC NULLS LAST",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(competencies))
}

#[derive(Debug, Deserialize)]
pub struct NewCompetency {
    pub user_id: Uuid,
    pub skill_name: String,
    pub category: CompetencyCategory,
    pub status: CompetencyStatus,
    pub date_assessed: Option<NaiveDate>,
    pub assessor_name: Option<String>,
    pub assessor_role: Option<String>,
    pub setting: Option<String>,
    pub notes: Option<String>,
    pub evidence_voice_log_id: Option<Uuid>,
}

/// POST /api/v1/competencies
///
/// Assessor fields are accepted for any status but required for none — a
/// sign-off recorded from memory before the paperwork catches up is legal.
pub async fn handle_add_competency(
    State(state): State<AppState>,
    Json(request): Json<NewCompetency>,
) -> Result<Json<CompetencyRow>, AppError> {
    if request.skill_name.trim().is_empty() {
        return Err(AppError::Validation("skill_name cannot be empty".to_string()));
    }

    let competency = sqlx::query_as::<_, CompetencyRow>(
        r#"
        INSERT INTO competencies
            (user_id, skill_name, category, status, date_assessed,
             assessor_name, assessor_role, setting, notes, evidence_voice_log_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.skill_name)
    .bind(request.category)
    .bind(request.status)
    .bind(request.date_assessed)
    .bind(&request.assessor_name)
    .bind(&request.assessor_role)
    .bind(&request.setting)
    .bind(&request.notes)
    .bind(request.evidence_voice_log_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(competency))
}
