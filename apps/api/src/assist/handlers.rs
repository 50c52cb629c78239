//! Axum route handlers for the AI assist proxy.
//!
//! Every operation follows the same shape: check the caller's daily quota
//! (rejecting with 429 before the upstream call), run the LLM, log the call
//! against the usage table, and return the result with a quota snapshot.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assist::prompts;
use crate::assist::usage::{self, AssistKind, UsageSnapshot};
use crate::errors::AppError;
use crate::models::recommendation::RecommendationKind;
use crate::models::voice::SuggestedEntryKind;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Transcription
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    pub user_id: Uuid,
    pub base64_audio: String,
    pub mime_type: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResult {
    transcription: String,
    suggestion: SuggestedEntryKind,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
    pub suggestion: SuggestedEntryKind,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/transcribe
pub async fn handle_transcribe(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Result<Json<TranscribeResponse>, AppError> {
    if request.base64_audio.is_empty() {
        return Err(AppError::Validation("base64_audio cannot be empty".to_string()));
    }

    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let result: TranscriptionResult = state
        .llm
        .call_json_with_audio(
            &request.base64_audio,
            &request.mime_type,
            prompts::TRANSCRIBE_PROMPT,
            prompts::TRANSCRIBE_SYSTEM,
        )
        .await
        .map_err(|e| AppError::Llm(format!("Failed to process voice note: {e}")))?;

    let tokens = usage::estimate_tokens(&request.base64_audio, &result.transcription);
    usage::record_usage(&state.db, request.user_id, AssistKind::Transcribe, tokens).await;

    Ok(Json(TranscribeResponse {
        transcription: result.transcription,
        suggestion: result.suggestion,
        usage: snapshot,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Reflection prompts & composition
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReflectionPromptsRequest {
    pub user_id: Uuid,
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct ReflectionPromptsResponse {
    pub prompts: Vec<String>,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/reflection-prompts
///
/// Generates probing questions from a situation description, to interview
/// the nurse toward an NMC-compliant reflection.
pub async fn handle_reflection_prompts(
    State(state): State<AppState>,
    Json(request): Json<ReflectionPromptsRequest>,
) -> Result<Json<ReflectionPromptsResponse>, AppError> {
    if request.context.trim().is_empty() {
        return Err(AppError::Validation("context cannot be empty".to_string()));
    }

    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let prompt = prompts::REFLECTION_PROMPTS_TEMPLATE.replace("{context}", &request.context);
    let questions: Vec<String> = state
        .llm
        .call_json(&prompt, prompts::REFLECTION_PROMPTS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate reflection prompts: {e}")))?;

    let tokens = usage::estimate_tokens(&prompt, &questions.join("\n"));
    usage::record_usage(
        &state.db,
        request.user_id,
        AssistKind::ReflectionPrompts,
        tokens,
    )
    .await;

    Ok(Json(ReflectionPromptsResponse {
        prompts: questions,
        usage: snapshot,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ComposeReflectionRequest {
    pub user_id: Uuid,
    pub context: String,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComposeReflectionResponse {
    pub reflection: String,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/reflection
///
/// Compiles interview answers into a structured "What? So What? Now What?"
/// reflection in markdown.
pub async fn handle_compose_reflection(
    State(state): State<AppState>,
    Json(request): Json<ComposeReflectionRequest>,
) -> Result<Json<ComposeReflectionResponse>, AppError> {
    if request.questions.len() != request.answers.len() {
        return Err(AppError::Validation(
            "questions and answers must have the same length".to_string(),
        ));
    }

    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let qa_pairs = request
        .questions
        .iter()
        .zip(&request.answers)
        .map(|(q, a)| format!("Q: {q}\nA: {a}"))
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = format!(
        "Context: {}\n\nUser Answers:\n{}",
        request.context, qa_pairs
    );

    let reflection = state
        .llm
        .call(&prompt, prompts::COMPOSE_REFLECTION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate reflection: {e}")))?;

    let tokens = usage::estimate_tokens(&prompt, &reflection);
    usage::record_usage(&state.db, request.user_id, AssistKind::Reflection, tokens).await;

    Ok(Json(ComposeReflectionResponse {
        reflection,
        usage: snapshot,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Career guidance chat
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatPathContext {
    pub current_band: String,
    pub target_band: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Uuid,
    pub message: String,
    pub career_path: Option<ChatPathContext>,
    #[serde(default)]
    pub competencies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let path_summary = match &request.career_path {
        Some(path) => format!(
            "{} → {} ({})",
            path.current_band,
            path.target_band,
            path.specialty.as_deref().unwrap_or("General")
        ),
        None => "Not set".to_string(),
    };
    let competency_summary = if request.competencies.is_empty() {
        "None logged yet".to_string()
    } else {
        request.competencies.join(", ")
    };
    let prompt = prompts::CHAT_TEMPLATE
        .replace("{message}", &request.message)
        .replace("{path}", &path_summary)
        .replace("{competencies}", &competency_summary);

    let reply = state
        .llm
        .call(&prompt, prompts::CHAT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Chat request failed: {e}")))?;

    let tokens = usage::estimate_tokens(&prompt, &reply);
    usage::record_usage(&state.db, request.user_id, AssistKind::Chat, tokens).await;

    Ok(Json(ChatResponse {
        reply,
        usage: snapshot,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Job-description analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestedPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestedRequirement {
    pub title: String,
    pub description: String,
    pub priority: SuggestedPriority,
}

#[derive(Debug, Deserialize)]
struct JdAnalysis {
    analysis: String,
    requirements: Vec<SuggestedRequirement>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeJdRequest {
    pub user_id: Uuid,
    pub job_description: String,
    pub current_band: Option<String>,
    pub target_band: Option<String>,
    pub specialty: Option<String>,
    #[serde(default)]
    pub competencies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJdResponse {
    pub analysis: String,
    pub requirements: Vec<SuggestedRequirement>,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/analyze-jd
///
/// Turns a pasted job description into suggested career requirements. The
/// caller decides which suggestions to persist via the career module.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJdRequest>,
) -> Result<Json<AnalyzeJdResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let competency_summary = if request.competencies.is_empty() {
        "None logged yet".to_string()
    } else {
        request.competencies.join(", ")
    };
    let prompt = prompts::ANALYZE_JD_TEMPLATE
        .replace("{jd}", &request.job_description)
        .replace(
            "{current_band}",
            request.current_band.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "{target_band}",
            request.target_band.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "{specialty}",
            request.specialty.as_deref().unwrap_or("Not specified"),
        )
        .replace("{competencies}", &competency_summary);

    let parsed: JdAnalysis = state
        .llm
        .call_json(&prompt, prompts::ANALYZE_JD_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to analyze job description: {e}")))?;

    let output = serde_json::to_string(&parsed.requirements).unwrap_or_default();
    let tokens = usage::estimate_tokens(&prompt, &output);
    usage::record_usage(&state.db, request.user_id, AssistKind::AnalyzeJd, tokens).await;

    Ok(Json(AnalyzeJdResponse {
        analysis: parsed.analysis,
        requirements: parsed.requirements,
        usage: snapshot,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// CPD recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestedRecommendation {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub reason: String,
    pub provider: Option<String>,
    #[serde(rename = "estimatedHours")]
    pub estimated_hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub user_id: Uuid,
    pub current_band: String,
    pub target_band: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<SuggestedRecommendation>,
    pub usage: UsageSnapshot,
}

/// POST /api/v1/assist/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let snapshot = usage::ensure_within_limit(&state.db, request.user_id, Utc::now()).await?;

    let prompt = prompts::RECOMMENDATIONS_TEMPLATE
        .replace("{current_band}", &request.current_band)
        .replace("{target_band}", &request.target_band)
        .replace(
            "{specialty}",
            request.specialty.as_deref().unwrap_or("General"),
        );

    let recommendations: Vec<SuggestedRecommendation> = state
        .llm
        .call_json(&prompt, prompts::RECOMMENDATIONS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate recommendations: {e}")))?;

    let output = serde_json::to_string(&recommendations).unwrap_or_default();
    let tokens = usage::estimate_tokens(&prompt, &output);
    usage::record_usage(
        &state.db,
        request.user_id,
        AssistKind::Recommendations,
        tokens,
    )
    .await;

    Ok(Json(RecommendationsResponse {
        recommendations,
        usage: snapshot,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Usage
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assist/usage
pub async fn handle_usage(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UsageSnapshot>, AppError> {
    let snapshot = usage::usage_today(&state.db, params.user_id, Utc::now()).await?;
    Ok(Json(snapshot))
}
