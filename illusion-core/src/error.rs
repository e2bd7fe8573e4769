use thiserror::Error;

/// Errors raised while constructing illusion geometry.
///
/// Degenerate numeric inputs (zero or negative lengths and radii) are
/// deliberately *not* errors; they produce well-defined degenerate
/// geometry instead. Only parameters that would break the construction
/// outright are rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
