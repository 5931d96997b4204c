//! trivia-server: HTTP API for a trivia question bank
//!
//! Exposes categories and questions over JSON, with paginated listing,
//! keyword search and a quiz endpoint that serves random unseen questions.

pub mod db;
pub mod http;
pub mod models;
pub mod picker;

pub use db::{MemoryStore, PgStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use picker::{QuestionPicker, SeededPicker, ThreadRngPicker};
