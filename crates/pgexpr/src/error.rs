//! Error types for pgexpr

use thiserror::Error;

/// Result type alias for pgexpr operations
pub type ExprResult<T> = Result<T, ExprError>;

/// Errors raised while quoting literal values.
///
/// Rendering composites and comparisons never fails; only the quoting
/// capability behind [`ExprBuilder::literal`](crate::ExprBuilder::literal)
/// produces these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The type hint is not one the quoter knows how to handle
    #[error("Unsupported type hint: {0}")]
    UnsupportedType(String),

    /// The value cannot be rendered as the requested type
    #[error("Invalid value for type '{type_hint}': {message}")]
    InvalidValue { type_hint: String, message: String },
}

impl ExprError {
    /// Create an unsupported type hint error
    pub fn unsupported_type(type_hint: impl Into<String>) -> Self {
        Self::UnsupportedType(type_hint.into())
    }

    /// Create an invalid value error for a specific type hint
    pub fn invalid_value(type_hint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            type_hint: type_hint.into(),
            message: message.into(),
        }
    }

    /// Check if this is an unsupported type hint error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    /// Check if this is an invalid value error
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
