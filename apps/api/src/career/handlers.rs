use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compliance::progress::{pathway_progress, PathwayProgress};
use crate::errors::AppError;
use crate::models::career::{
    CareerPathRow, CareerRequirementRow, RequirementKind, RequirementStatus,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct CareerPathResponse {
    #[serde(flatten)]
    pub path: CareerPathRow,
    pub requirements: Vec<CareerRequirementRow>,
    pub progress: PathwayProgress,
}

/// GET /api/v1/career
///
/// A user always has exactly one path; first read creates the default
/// Band 5 → Band 6 / General one. Progress is recomputed from the
/// requirement rows on every call.
pub async fn handle_get_career_path(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CareerPathResponse>, AppError> {
    let path = get_or_create_path(&state, params.user_id).await?;
    let requirements = fetch_requirements(&state, path.id).await?;
    let progress = pathway_progress(&path, &requirements);

    Ok(Json(CareerPathResponse {
        path,
        requirements,
        progress,
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCareerPath {
    pub user_id: Uuid,
    pub current_band: String,
    pub target_band: String,
    pub specialty: String,
    pub current_salary: Option<f64>,
    pub target_salary: Option<f64>,
}

/// PUT /api/v1/career
pub async fn handle_update_career_path(
    State(state): State<AppState>,
    Json(request): Json<UpdateCareerPath>,
) -> Result<Json<CareerPathResponse>, AppError> {
    // Ensure the row exists before updating, so a PUT on a fresh account works.
    get_or_create_path(&state, request.user_id).await?;

    let path = sqlx::query_as::<_, CareerPathRow>(
        r#"
        UPDATE career_paths SET
            current_band = $2,
            target_band = $3,
            specialty = $4,
            current_salary = $5,
            target_salary = $6
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.current_band)
    .bind(&request.target_band)
    .bind(&request.specialty)
    .bind(request.current_salary)
    .bind(request.target_salary)
    .fetch_one(&state.db)
    .await?;

    let requirements = fetch_requirements(&state, path.id).await?;
    let progress = pathway_progress(&path, &requirements);

    Ok(Json(CareerPathResponse {
        path,
        requirements,
        progress,
    }))
}

#[derive(Debug, Deserialize)]
pub struct NewRequirement {
    pub user_id: Uuid,
    pub title: String,
    pub kind: RequirementKind,
    #[serde(default)]
    pub description: String,
}

/// POST /api/v1/career/requirements
pub async fn handle_add_requirement(
    State(state): State<AppState>,
    Json(request): Json<NewRequirement>,
) -> Result<Json<CareerRequirementRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let path = get_or_create_path(&state, request.user_id).await?;

    let requirement = sqlx::query_as::<_, CareerRequirementRow>(
        r#"
        INSERT INTO career_requirements (career_path_id, title, kind, status, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(path.id)
    .bind(&request.title)
    .bind(request.kind)
    .bind(RequirementStatus::NotStarted)
    .bind(&request.description)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(requirement))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequirement {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ToggleRequirementResponse {
    pub requirement: CareerRequirementRow,
    pub progress: PathwayProgress,
}

/// POST /api/v1/career/requirements/:id/toggle
///
/// Advances the requirement one step around the Not Started → In Progress →
/// Done cycle. The next status is computed here from the stored one, so
/// concurrent clients can't skip a state by racing with a stale value.
pub async fn handle_toggle_requirement(
    State(state): State<AppState>,
    Path(requirement_id): Path<Uuid>,
    Json(request): Json<ToggleRequirement>,
) -> Result<Json<ToggleRequirementResponse>, AppError> {
    let existing = sqlx::query_as::<_, CareerRequirementRow>(
        r#"
        SELECT r.* FROM career_requirements r
        JOIN career_paths p ON p.id = r.career_path_id
        WHERE r.id = $1 AND p.user_id = $2
        "#,
    )
    .bind(requirement_id)
    .bind(request.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Requirement {requirement_id} not found")))?;

    let requirement = sqlx::query_as::<_, CareerRequirementRow>(
        "UPDATE career_requirements SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(requirement_id)
    .bind(existing.status.advance())
    .fetch_one(&state.db)
    .await?;

    let path = get_or_create_path(&state, request.user_id).await?;
    let requirements = fetch_requirements(&state, path.id).await?;
    let progress = pathway_progress(&path, &requirements);

    Ok(Json(ToggleRequirementResponse {
        requirement,
        progress,
    }))
}

async fn get_or_create_path(state: &AppState, user_id: Uuid) -> Result<CareerPathRow, AppError> {
    let existing = sqlx::query_as::<_, CareerPathRow>(
        "SELECT * FROM career_paths WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?;

    if let Some(path) = existing {
        return Ok(path);
    }

    Ok(sqlx::query_as::<_, CareerPathRow>(
        r#"
        INSERT INTO career_paths (user_id, current_band, target_band, specialty)
        VALUES ($1, 'Band 5', 'Band 6', 'General')
        RETURNING *
        "#,
    )
    .bind(user_id)
    .fetch_one(&state.db)
    .await?)
}

async fn fetch_requirements(
    state: &AppState,
    career_path_id: Uuid,
) -> Result<Vec<CareerRequirementRow>, AppError> {
    Ok(sqlx::query_as::<_, CareerRequirementRow>(
        "SELECT * FROM career_requirements WHERE career_path_id = $1 ORDER BY created_at ASC",
    )
    .bind(career_path_id)
    .fetch_all(&state.db)
    .await?)
}
