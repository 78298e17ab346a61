/// Career-coach AI endpoints
///
/// # Endpoints
///
/// - `POST /api/chat` - Conversational career coaching
/// - `POST /api/analyze-resume` - Structured resume review
/// - `POST /api/generate-roadmap` - Structured career roadmap
///
/// The structured endpoints ask the model for JSON but never trust it to
/// comply: the reply goes through best-effort JSON extraction, and when
/// even that fails the raw text is wrapped in a degraded-but-valid
/// fallback payload so clients always get the documented shape.
use crate::{
    ai::{extract_json, prompts},
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Conversation history; the last entry is the current question
    pub messages: Vec<prompts::ChatMessage>,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The model's reply, verbatim
    pub message: String,
}

/// Resume analysis request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    /// Plain-text resume content
    pub resume_text: String,
}

/// Roadmap request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    pub current_role: String,
    pub target_role: String,
    pub experience: String,
    pub skills: String,
}

/// Conversational career coaching
///
/// # Errors
///
/// - `400 Bad Request`: empty conversation
/// - `502 Bad Gateway`: provider failure
/// - `503 Service Unavailable`: AI not configured
/// - `504 Gateway Timeout`: provider did not respond in time
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if req.messages.is_empty() {
        return Err(ApiError::BadRequest(
            "Invalid request: missing messages".to_string(),
        ));
    }

    let prompt = prompts::chat_prompt(&req.messages);
    let reply = state.ai.generate(&prompt).await?;

    Ok(Json(ChatResponse { message: reply }))
}

/// Structured resume review
///
/// Returns `{score, analysis, suggestions}`. When the model ignores the
/// JSON instruction the raw text lands in `analysis` with a default score.
pub async fn analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if req.resume_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Invalid request: missing resume text".to_string(),
        ));
    }

    let prompt = prompts::resume_prompt(&req.resume_text);
    let text = state.ai.generate(&prompt).await?;

    let payload = extract_json(&text).unwrap_or_else(|| {
        json!({
            "score": 75,
            "analysis": text,
            "suggestions": "Please review the analysis above for improvement suggestions."
        })
    });

    Ok(Json(payload))
}

/// Structured career roadmap
///
/// Returns `{steps, timeline, resources}`. When the model ignores the
/// JSON instruction the raw text becomes a single roadmap step.
pub async fn generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<GenerateRoadmapRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let prompt = prompts::roadmap_prompt(
        &req.current_role,
        &req.target_role,
        &req.experience,
        &req.skills,
    );
    let text = state.ai.generate(&prompt).await?;

    let payload = extract_json(&text).unwrap_or_else(|| {
        json!({
            "steps": [{ "title": "Career Roadmap", "description": text, "actions": [] }],
            "timeline": "See details above",
            "resources": "Customized based on your goals"
        })
    });

    Ok(Json(payload))
}
