use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct UpsertProfile {
    pub user_id: Uuid,
    pub name: String,
    pub current_role: String,
    pub current_band: String,
    pub nmc_pin: Option<String>,
    pub revalidation_date: Option<NaiveDate>,
}

/// PUT /api/v1/profile
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(request): Json<UpsertProfile>,
) -> Result<Json<ProfileRow>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let profile = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, name, "current_role", current_band, nmc_pin, revalidation_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            "current_role" = EXCLUDED."current_role",
            current_band = EXCLUDED.current_band,
            nmc_pin = EXCLUDED.nmc_pin,
            revalidation_date = EXCLUDED.revalidation_date
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.name)
    .bind(&request.current_role)
    .bind(&request.current_band)
    .bind(&request.nmc_pin)
    .bind(request.revalidation_date)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(profile))
}
