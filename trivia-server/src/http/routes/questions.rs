//! Question endpoints
//!
//! `POST /questions` multiplexes three operations on the body's fields,
//! checked in order: `searchTerm` (search), all of
//! `question`/`answer`/`difficulty`/`category` (create), then `type`
//! (filter by category type).

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::{QuestionPage, SuccessResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody, Page};
use crate::http::server::AppState;
use crate::models::{category_map, is_truthy, NewQuestion, Pagination};

/// Body of `POST /questions`; fields stay loose JSON until a branch is chosen
///
/// Create fields keep an explicit `null` as `Some(Value::Null)` so a body
/// that names them without values still counts as a create attempt.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsRequest {
    #[serde(default, deserialize_with = "present")]
    pub question: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub answer: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub difficulty: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<Value>,
    #[serde(rename = "type")]
    pub category_type: Option<Value>,
}

/// Operation selected by a `POST /questions` body
#[derive(Debug, PartialEq)]
enum QuestionsAction {
    Search(String),
    Create,
    FilterByType(String),
    /// Some create fields were sent, but not all of them
    Incomplete,
    None,
}

impl QuestionsRequest {
    fn action(&self) -> QuestionsAction {
        let create_fields = [
            self.question.as_ref(),
            self.answer.as_ref(),
            self.difficulty.as_ref(),
            self.category.as_ref(),
        ];

        if is_truthy(self.search_term.as_ref()) {
            QuestionsAction::Search(term_text(self.search_term.as_ref()))
        } else if create_fields.iter().all(|f| is_truthy(*f)) {
            QuestionsAction::Create
        } else if is_truthy(self.category_type.as_ref()) {
            QuestionsAction::FilterByType(term_text(self.category_type.as_ref()))
        } else if create_fields.iter().any(|f| f.is_some()) {
            QuestionsAction::Incomplete
        } else {
            QuestionsAction::None
        }
    }
}

/// Any value, `null` included, means the key was sent.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn term_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Response of the multiplexed `POST /questions`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Page(QuestionPage),
    Created(SuccessResponse),
}

/// Deletion acknowledgement
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// GET /questions - every question, paginated, with the category map
///
/// An empty page is a 404. `current_category` is the first question's
/// category; a dangling reference there is a 500.
async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionPage>, ApiError> {
    let selection = state.store.questions().await?;
    let total = selection.len();

    let current = page.slice(selection);
    let first = current
        .first()
        .ok_or_else(|| ApiError::not_found("page", page.page))?;

    let current_category = state.store.category(first.category).await?.ok_or_else(|| {
        ApiError::internal(format!(
            "question {} references missing category {}",
            first.id, first.category
        ))
    })?;

    let categories = category_map(state.store.categories().await?);

    Ok(Json(
        QuestionPage::new(current, total, current_category.kind).with_categories(categories),
    ))
}

/// DELETE /questions/{id}
///
/// A missing question folds into the same 422 as a failed delete.
async fn delete_question(
    State(state): State<AppState>,
    IdPath(question_id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .question(question_id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or_else(|| ApiError::unprocessable(format!("question {} not found", question_id)))?;

    let removed = state
        .store
        .delete_question(question_id)
        .await
        .map_err(ApiError::unprocessable)?;
    if !removed {
        return Err(ApiError::unprocessable(format!(
            "question {} vanished before delete",
            question_id
        )));
    }

    tracing::info!(question_id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// POST /questions - search, create or filter by category type
async fn post_questions(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(req): JsonBody<QuestionsRequest>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    let response = match req.action() {
        QuestionsAction::Search(term) => {
            QuestionsPostResponse::Page(search(&state, &term, page).await?)
        }
        QuestionsAction::Create => {
            QuestionsPostResponse::Created(create(&state, &req).await?)
        }
        QuestionsAction::FilterByType(term) => {
            QuestionsPostResponse::Page(filter_by_type(&state, &term, page).await?)
        }
        QuestionsAction::Incomplete => {
            return Err(ApiError::unprocessable(
                "question, answer, difficulty and category are all required",
            ))
        }
        QuestionsAction::None => {
            return Err(ApiError::bad_request(
                "expected searchTerm, a full question or type",
            ))
        }
    };

    Ok(Json(response))
}

/// Case-insensitive search on question text.
///
/// No results on the page is a 422, since there is no first result to
/// take `current_category` from.
async fn search(state: &AppState, term: &str, page: Pagination) -> Result<QuestionPage, ApiError> {
    let selection = state
        .store
        .search_questions(term)
        .await
        .map_err(ApiError::unprocessable)?;
    let total = selection.len();

    let current = page.slice(selection);
    let first = current
        .first()
        .ok_or_else(|| ApiError::unprocessable(format!("no questions match '{}'", term)))?;

    let category = state
        .store
        .category(first.category)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or_else(|| {
            ApiError::unprocessable(format!(
                "question {} references missing category {}",
                first.id, first.category
            ))
        })?;

    Ok(QuestionPage::new(current, total, category.kind))
}

async fn create(state: &AppState, req: &QuestionsRequest) -> Result<SuccessResponse, ApiError> {
    let new = NewQuestion::from_json(
        req.question.as_ref(),
        req.answer.as_ref(),
        req.difficulty.as_ref(),
        req.category.as_ref(),
    )?;

    let created = state
        .store
        .insert_question(new)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(question_id = created.id, category = created.category, "question created");
    Ok(SuccessResponse::ok())
}

async fn filter_by_type(
    state: &AppState,
    term: &str,
    page: Pagination,
) -> Result<QuestionPage, ApiError> {
    let category = state
        .store
        .category_by_type(term)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or_else(|| ApiError::not_found("category type", term))?;

    let selection = state
        .store
        .questions_in_category(category.id)
        .await
        .map_err(ApiError::unprocessable)?;
    let total = selection.len();

    Ok(QuestionPage::new(page.slice(selection), total, category.kind))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/{id}", delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> QuestionsRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn search_takes_priority() {
        let req = request(json!({
            "searchTerm": "title",
            "question": "Q", "answer": "A", "difficulty": 1, "category": 1,
            "type": "Science"
        }));
        assert_eq!(req.action(), QuestionsAction::Search("title".into()));
    }

    #[test]
    fn full_question_creates() {
        let req = request(json!({
            "question": "Q", "answer": "A", "difficulty": 2, "category": "5",
            "type": "Science"
        }));
        assert_eq!(req.action(), QuestionsAction::Create);
    }

    #[test]
    fn type_filters_when_question_incomplete() {
        let req = request(json!({"question": "Q", "type": "art"}));
        assert_eq!(req.action(), QuestionsAction::FilterByType("art".into()));
    }

    #[test]
    fn empty_search_term_is_ignored() {
        let req = request(json!({"searchTerm": "", "type": "art"}));
        assert_eq!(req.action(), QuestionsAction::FilterByType("art".into()));
    }

    #[test]
    fn partial_question_is_incomplete() {
        let req = request(json!({"question": "I have no answer ?"}));
        assert_eq!(req.action(), QuestionsAction::Incomplete);

        let req = request(json!({"question": "Q", "answer": "A", "difficulty": 0, "category": 1}));
        assert_eq!(req.action(), QuestionsAction::Incomplete);
    }

    #[test]
    fn null_create_fields_are_incomplete() {
        let req = request(json!({
            "question": null, "answer": null, "difficulty": null, "category": null
        }));
        assert_eq!(req.question, Some(Value::Null));
        assert_eq!(req.action(), QuestionsAction::Incomplete);
    }

    #[test]
    fn empty_body_has_no_action() {
        assert_eq!(request(json!({})).action(), QuestionsAction::None);
        assert_eq!(
            request(json!({"searchTerm": null, "unrelated": 1})).action(),
            QuestionsAction::None
        );
    }
}
