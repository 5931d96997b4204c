//! Question repository
//!
//! Every list query is ordered by id so pages are stable between requests.

use sqlx::PgPool;

use super::StoreError;
use crate::models::{NewQuestion, Question};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions, ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Questions whose text contains `term`, case-insensitively.
    ///
    /// `%` and `_` in the term keep their LIKE meaning.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Questions not in `previous`, optionally restricted to one category.
    pub async fn unseen(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE NOT (id = ANY($1))
              AND ($2::INT IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(previous)
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a question, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
