//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::common::QuestionPage;
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, Page};
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// GET /categories - id -> type for every category
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - one category's questions, paginated
///
/// Store failures here are 400s, unlike the 422 used by the question
/// endpoints.
async fn category_questions(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    Page(page): Page,
) -> Result<Json<QuestionPage>, ApiError> {
    let category = state
        .store
        .category(category_id)
        .await
        .map_err(ApiError::bad_request)?
        .ok_or_else(|| ApiError::not_found("category", category_id))?;

    let selection = state
        .store
        .questions_in_category(category.id)
        .await
        .map_err(ApiError::bad_request)?;
    let total = selection.len();

    Ok(Json(QuestionPage::new(
        page.slice(selection),
        total,
        category.kind,
    )))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
