//! Error type for shape construction invariants.

/// Error returned when a [`Shape`](crate::Shape) invariant is violated during
/// programmatic construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShapeError {
    /// Record field names must be unique.
    #[error("duplicate record field name '{0}'")]
    DuplicateFieldName(String),
}
