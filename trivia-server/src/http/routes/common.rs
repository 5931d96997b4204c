//! Response shapes shared by the question listing endpoints

use serde::Serialize;

use crate::models::{CategoryMap, Question};

/// One page of questions
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count before pagination
    pub total_questions: usize,
    /// Type of the category the page is scoped to, or of the first
    /// question's category on unscoped listings
    pub current_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
}

impl QuestionPage {
    pub fn new(questions: Vec<Question>, total_questions: usize, current_category: String) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category,
            categories: None,
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Bare success acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
