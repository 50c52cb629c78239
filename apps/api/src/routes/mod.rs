pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::{assist, career, competencies, learning, profile, training, vault};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_upsert_profile),
        )
        // Document vault
        .route(
            "/api/v1/documents",
            get(vault::handlers::handle_list_documents)
                .post(vault::handlers::handle_upload_document),
        )
        .route(
            "/api/v1/documents/:id/url",
            get(vault::handlers::handle_document_url),
        )
        // Mandatory training
        .route(
            "/api/v1/training",
            get(training::handlers::handle_list_training)
                .post(training::handlers::handle_add_training),
        )
        .route(
            "/api/v1/training/summary",
            get(training::handlers::handle_training_summary),
        )
        // CPD, reflections, revalidation
        .route(
            "/api/v1/cpd",
            get(learning::handlers::handle_list_cpd).post(learning::handlers::handle_add_cpd),
        )
        .route(
            "/api/v1/reflections",
            get(learning::handlers::handle_list_reflections)
                .post(learning::handlers::handle_add_reflection),
        )
        .route(
            "/api/v1/revalidation",
            get(learning::handlers::handle_revalidation),
        )
        // Voice logs
        .route(
            "/api/v1/voice-logs",
            get(learning::handlers::handle_list_voice_logs)
                .post(learning::handlers::handle_add_voice_log),
        )
        .route(
            "/api/v1/voice-logs/:id",
            patch(learning::handlers::handle_update_voice_log)
                .delete(learning::handlers::handle_delete_voice_log),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(learning::handlers::handle_list_recommendations)
                .post(learning::handlers::handle_add_recommendation),
        )
        .route(
            "/api/v1/recommendations/:id/complete",
            post(learning::handlers::handle_complete_recommendation),
        )
        // Competencies
        .route(
            "/api/v1/competencies",
            get(competencies::handlers::handle_list_competencies)
                .post(competencies::handlers::handle_add_competency),
        )
        // Career pathway
        .route(
            "/api/v1/career",
            get(career::handlers::handle_get_career_path)
                .put(career::handlers::handle_update_career_path),
        )
        .route(
            "/api/v1/career/requirements",
            post(career::handlers::handle_add_requirement),
        )
        .route(
            "/api/v1/career/requirements/:id/toggle",
            post(career::handlers::handle_toggle_requirement),
        )
        // AI assist proxy
        .route(
            "/api/v1/assist/transcribe",
            post(assist::handlers::handle_transcribe),
        )
        .route(
            "/api/v1/assist/reflection-prompts",
            post(assist::handlers::handle_reflection_prompts),
        )
        .route(
            "/api/v1/assist/reflection",
            post(assist::handlers::handle_compose_reflection),
        )
        .route("/api/v1/assist/chat", post(assist::handlers::handle_chat))
        .route(
            "/api/v1/assist/analyze-jd",
            post(assist::handlers::handle_analyze_jd),
        )
        .route(
            "/api/v1/assist/recommendations",
            post(assist::handlers::handle_recommendations),
        )
        .route("/api/v1/assist/usage", get(assist::handlers::handle_usage))
        .with_state(state)
}
