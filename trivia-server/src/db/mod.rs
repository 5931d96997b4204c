//! Database layer - connection pool, repositories and the store seam
//!
//! - Connection pool with an explicit connection cap
//! - Every write is a single statement; no multi-statement transactions
//! - Referential integrity between questions and categories is not enforced

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::{CategoryRepo, QuestionRepo, StoreError};
pub use store::{PgStore, TriviaStore};
