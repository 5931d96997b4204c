//! Domain models
//!
//! Request fields are validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod pagination;
pub mod question;
pub mod validation;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{is_truthy, NewQuestion, Question};
pub use validation::ValidationError;
