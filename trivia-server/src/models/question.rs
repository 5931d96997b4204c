//! Question records and the create payload
//!
//! Request bodies arrive as loose JSON: the create branch fires only when
//! all four fields are truthy, and `difficulty`/`category` may be sent
//! either as integers or as numeric strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// A stored trivia question, also its wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    /// Soft reference to `Category::id`; never checked on write
    pub category: i32,
}

/// A question about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl NewQuestion {
    /// Build a question from raw JSON fields.
    ///
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use trivia_server::models::NewQuestion;
    ///
    /// let q = NewQuestion::from_json(
    ///     Some(&json!("Who hosts the family feud TV show ?")),
    ///     Some(&json!("Steve Harvey")),
    ///     Some(&json!(2)),
    ///     Some(&json!("5")),
    /// )
    /// .unwrap();
    /// assert_eq!(q.category, 5);
    /// ```
    pub fn from_json(
        question: Option<&Value>,
        answer: Option<&Value>,
        difficulty: Option<&Value>,
        category: Option<&Value>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: text_field("question", question)?,
            answer: text_field("answer", answer)?,
            difficulty: int_field("difficulty", difficulty)?,
            category: int_field("category", category)?,
        })
    }
}

/// JSON truthiness: null, false, 0, "" and empty containers are all falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

fn text_field(field: &'static str, value: Option<&Value>) -> Result<String, ValidationError> {
    if !is_truthy(value) {
        return Err(ValidationError::Missing { field });
    }
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a string",
        }),
    }
}

fn int_field(field: &'static str, value: Option<&Value>) -> Result<i32, ValidationError> {
    if !is_truthy(value) {
        return Err(ValidationError::Missing { field });
    }
    let invalid = ValidationError::InvalidFormat {
        field,
        reason: "must be an integer",
    };
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(invalid),
        Some(Value::String(s)) => s.trim().parse::<i32>().map_err(|_| invalid),
        _ => Err(invalid),
    }
}
