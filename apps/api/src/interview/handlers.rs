//! Axum route handlers for the interview API.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::generator::generate_questions;
use crate::interview::resume_input::{ResumeText, RESUME_FIELD};
use crate::models::question::GeneratedQuestionSet;
use crate::state::AppState;

/// GET /routes
///
/// Describes the one callable operation. Paths carry the configured prefix.
pub async fn handle_list_routes(State(state): State<AppState>) -> Json<Value> {
    Json(routes_descriptor(state.config.route_prefix()))
}

pub fn routes_descriptor(prefix: &str) -> Value {
    json!({
        "routes": {
            (format!("{prefix}/generate")): {
                "methods": ["POST"],
                "form_data": { (RESUME_FIELD): "string" }
            }
        }
    })
}

/// POST /generate
///
/// Seeds a conversation with the resume and returns MCQ, short-answer and
/// coding question blocks, in that order. Input validation happens in the
/// `ResumeText` extractor, before any remote call.
pub async fn handle_generate(
    State(state): State<AppState>,
    ResumeText(resume): ResumeText,
) -> Result<Json<Vec<GeneratedQuestionSet>>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate", %request_id);

    async move {
        info!("Generating questions for a {}-byte resume", resume.len());
        let sets = generate_questions(state.llm.as_ref(), &resume).await?;
        Ok::<_, AppError>(Json(sets))
    }
    .instrument(span)
    .await
}
