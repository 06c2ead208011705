//! Error type for malformed shape expressions.

/// Error returned when a string fails to parse as a shape expression.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ExprError(pub String);

impl From<String> for ExprError {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExprError {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
