//! Category repository
//!
//! Categories are read-only here; rows are seeded outside the service.

use sqlx::PgPool;

use super::StoreError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories, ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// A single category by id.
    pub async fn get(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// The single category whose type contains `term`, case-insensitively.
    ///
    /// Fetches at most two rows so an ambiguous term is reported instead of
    /// silently picking one.
    pub async fn find_by_type(&self, term: &str) -> Result<Option<Category>, StoreError> {
        let mut rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE type ILIKE '%' || $1 || '%'
            ORDER BY id
            LIMIT 2
            "#,
        )
        .bind(term)
        .fetch_all(self.pool)
        .await?;

        if rows.len() > 1 {
            return Err(StoreError::Ambiguous {
                resource: "category",
                term: term.to_owned(),
            });
        }
        Ok(rows.pop())
    }
}
