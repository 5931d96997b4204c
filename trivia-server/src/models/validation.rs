//! Validation error types

use std::fmt;

/// Validation error for incoming question fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent, null or otherwise falsy
    Missing { field: &'static str },

    /// Field is present but has the wrong shape
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "difficulty",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "difficulty: must be an integer");
        assert_eq!(
            ValidationError::Missing { field: "answer" }.to_string(),
            "answer is required"
        );
    }
}
