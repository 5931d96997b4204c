//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, Page};
use crate::http::server::AppState;
use crate::models::Question;

/// Body of `POST /quizzes`
///
/// `quiz_category` is `{id, type}` or null; the web client sends
/// `{"type": "click", "id": 0}` for "all", which matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Value>,
    pub quiz_category: Option<Value>,
}

/// A validated quiz request
#[derive(Debug, PartialEq, Eq)]
struct QuizSelection {
    previous: Vec<i32>,
    category: Option<i32>,
}

impl QuizRequest {
    fn selection(&self) -> Result<QuizSelection, ApiError> {
        let previous = match &self.previous_questions {
            Some(Value::Array(ids)) => ids
                .iter()
                .map(|id| json_id(id).ok_or_else(|| invalid("previous_questions", id)))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => return Err(invalid("previous_questions", other)),
            None => return Err(ApiError::unprocessable("previous_questions is required")),
        };

        let category = match &self.quiz_category {
            None | Some(Value::Null) => None,
            Some(Value::Object(fields)) => {
                let id = fields
                    .get("id")
                    .ok_or_else(|| ApiError::unprocessable("quiz_category has no id"))?;
                Some(json_id(id).ok_or_else(|| invalid("quiz_category.id", id))?)
            }
            Some(other) => return Err(invalid("quiz_category", other)),
        };

        Ok(QuizSelection { previous, category })
    }
}

fn json_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn invalid(field: &str, value: &Value) -> ApiError {
    ApiError::unprocessable(format!("invalid {}: {}", field, value))
}

/// Quiz response
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// POST /quizzes - one random question not yet seen
///
/// Candidates are capped at one page before the random pick. No candidates
/// left is a 422.
async fn next_question(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let QuizSelection { previous, category } = req.selection()?;

    let selection = state
        .store
        .unseen_questions(&previous, category)
        .await
        .map_err(ApiError::unprocessable)?;

    let mut candidates = page.slice(selection);
    let index = state
        .picker
        .pick(candidates.len())
        .ok_or_else(|| ApiError::unprocessable("no quiz candidates remain"))?;
    let question = candidates.swap_remove(index);

    tracing::debug!(
        question_id = question.id,
        seen = previous.len(),
        ?category,
        "quiz question picked"
    );
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
