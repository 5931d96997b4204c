//! Store trait used by the route handlers
//!
//! Handlers only see `dyn TriviaStore`, so the router runs unchanged
//! against Postgres in production and against `MemoryStore` in tests.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, QuestionRepo, StoreError};
use crate::models::{Category, NewQuestion, Question};

/// Persistence operations for categories and questions (testable)
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    /// The one category whose type contains `term` (case-insensitive).
    ///
    /// More than one match is `StoreError::Ambiguous`.
    async fn category_by_type(&self, term: &str) -> Result<Option<Category>, StoreError>;

    /// All questions, ordered by id.
    async fn questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn question(&self, id: i32) -> Result<Option<Question>, StoreError>;

    /// Questions whose text contains `term` (case-insensitive), ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    /// Quiz candidate set: questions outside `previous`, optionally in one category.
    async fn unseen_questions(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError>;

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i32) -> Result<bool, StoreError>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn category_by_type(&self, term: &str) -> Result<Option<Category>, StoreError> {
        CategoryRepo::new(&self.pool).find_by_type(term).await
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).in_category(category).await
    }

    async fn unseen_questions(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).unseen(previous, category).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
