//! Axum route handlers for the AI assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::analysis::classifier::{classify, Classification};
use crate::errors::AppError;
use crate::models::answers::AnswersBundle;
use crate::models::lenient;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatAnswersRequest {
    pub portfolio_context: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub answers: Option<AnswersBundle>,
}

#[derive(Debug, Serialize)]
pub struct ChatAnswersResponse {
    pub answers: Map<String, Value>,
    pub hint: Option<Classification>,
    pub backend: String,
}

/// POST /api/v1/ai/chat-answers
///
/// Drafts first-person answers to the standard recruiter questions.
/// Onboarding answers, when supplied, are classified and passed as a framing hint.
pub async fn handle_chat_answers(
    State(state): State<AppState>,
    Json(request): Json<ChatAnswersRequest>,
) -> Result<Json<ChatAnswersResponse>, AppError> {
    if request.portfolio_context.trim().is_empty() {
        return Err(AppError::Validation(
            "portfolio_context cannot be empty".to_string(),
        ));
    }

    let drafter = state.drafter.as_ref().ok_or(AppError::LlmUnavailable)?;

    let hint = classify(request.answers.as_ref());
    info!(
        "Drafting chat answers via {} (hint: {:?})",
        drafter.backend(),
        hint
    );

    let answers = drafter.draft(&request.portfolio_context, hint).await?;

    Ok(Json(ChatAnswersResponse {
        answers,
        hint,
        backend: drafter.backend().to_string(),
    }))
}
