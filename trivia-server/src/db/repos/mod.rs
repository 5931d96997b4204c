//! Postgres repositories
//!
//! Each repository borrows the pool and maps rows straight into the
//! domain models via `FromRow`.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A lookup that expects at most one row matched several
    #[error("multiple {resource} rows match '{term}'")]
    Ambiguous { resource: &'static str, term: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
