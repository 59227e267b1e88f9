//! Literal quoting capability.
//!
//! [`Quoter`] is the only seam between the expression builder and the
//! database dialect: it turns a raw value plus a type hint into a SQL literal.
//! [`PgQuoter`] is a PostgreSQL implementation that escapes values inline.
//!
//! # Example
//! ```ignore
//! use pgexpr::{PgQuoter, Quoter};
//! use serde_json::json;
//!
//! let q = PgQuoter::new();
//! assert_eq!(q.quote(&json!("O'Reilly"), "string")?, "'O''Reilly'");
//! assert_eq!(q.quote(&json!(42), "integer")?, "42");
//! # Ok::<(), pgexpr::ExprError>(())
//! ```

use crate::error::{ExprError, ExprResult};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

/// Turns a raw value into a SQL literal, guided by a type hint.
pub trait Quoter {
    /// Error raised for unsupported hints or values.
    type Error: std::error::Error;

    /// Quote `value` for inline embedding as a literal of type `type_hint`.
    fn quote(&self, value: &Value, type_hint: &str) -> Result<String, Self::Error>;
}

impl<T: Quoter + ?Sized> Quoter for &T {
    type Error = T::Error;

    fn quote(&self, value: &Value, type_hint: &str) -> Result<String, Self::Error> {
        (**self).quote(value, type_hint)
    }
}

impl<T: Quoter + ?Sized> Quoter for Box<T> {
    type Error = T::Error;

    fn quote(&self, value: &Value, type_hint: &str) -> Result<String, Self::Error> {
        (**self).quote(value, type_hint)
    }
}

impl<T: Quoter + ?Sized> Quoter for Arc<T> {
    type Error = T::Error;

    fn quote(&self, value: &Value, type_hint: &str) -> Result<String, Self::Error> {
        (**self).quote(value, type_hint)
    }
}

/// Literal type requested by a type hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// `string`, `text`, `varchar`, `char`
    Text,
    /// `integer`, `int`, `smallint`, `bigint`
    Integer,
    /// `float`, `double`, `real`, `decimal`, `numeric`
    Float,
    /// `boolean`, `bool`
    Boolean,
    /// `json`, `jsonb`
    Json,
}

impl TypeHint {
    /// Canonical name of the hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeHint::Text => "string",
            TypeHint::Integer => "integer",
            TypeHint::Float => "float",
            TypeHint::Boolean => "boolean",
            TypeHint::Json => "json",
        }
    }
}

impl FromStr for TypeHint {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        let hint = match s.to_ascii_lowercase().as_str() {
            "string" | "text" | "varchar" | "char" => TypeHint::Text,
            "integer" | "int" | "smallint" | "bigint" => TypeHint::Integer,
            "float" | "double" | "real" | "decimal" | "numeric" => TypeHint::Float,
            "boolean" | "bool" => TypeHint::Boolean,
            "json" | "jsonb" => TypeHint::Json,
            _ => return Err(ExprError::unsupported_type(s)),
        };
        Ok(hint)
    }
}

/// PostgreSQL literal quoter.
///
/// Text is wrapped in single quotes with embedded quotes doubled. With
/// `standard_conforming_strings` turned off, backslashes are doubled too and
/// the literal uses the `E'...'` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgQuoter {
    standard_conforming_strings: bool,
}

impl Default for PgQuoter {
    fn default() -> Self {
        Self::new()
    }
}

impl PgQuoter {
    /// Create a quoter assuming `standard_conforming_strings = on`.
    pub fn new() -> Self {
        Self {
            standard_conforming_strings: true,
        }
    }

    /// Match the server's `standard_conforming_strings` setting.
    pub fn standard_conforming_strings(mut self, enabled: bool) -> Self {
        self.standard_conforming_strings = enabled;
        self
    }

    fn quote_text(&self, text: &str, type_hint: &str) -> ExprResult<String> {
        if text.contains('\0') {
            return Err(ExprError::invalid_value(
                type_hint,
                "text cannot contain NUL character",
            ));
        }

        let escaped = text.replace('\'', "''");
        if !self.standard_conforming_strings && escaped.contains('\\') {
            return Ok(format!("E'{}'", escaped.replace('\\', "\\\\")));
        }
        Ok(format!("'{escaped}'"))
    }

    fn quote_integer(&self, value: &Value, type_hint: &str) -> ExprResult<String> {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(|n| n.to_string())
                .map_err(|e| ExprError::invalid_value(type_hint, format!("'{s}': {e}"))),
            other => Err(ExprError::invalid_value(
                type_hint,
                format!("expected an integer, got {other}"),
            )),
        }
    }

    fn quote_float(&self, value: &Value, type_hint: &str) -> ExprResult<String> {
        match value {
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Ok(trimmed.to_string()),
                    _ => Err(ExprError::invalid_value(
                        type_hint,
                        format!("'{s}' is not a finite number"),
                    )),
                }
            }
            other => Err(ExprError::invalid_value(
                type_hint,
                format!("expected a number, got {other}"),
            )),
        }
    }
}

impl Quoter for PgQuoter {
    type Error = ExprError;

    fn quote(&self, value: &Value, type_hint: &str) -> ExprResult<String> {
        let hint: TypeHint = type_hint.parse()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(type_hint, resolved = hint.as_str(), "quoting literal");

        if value.is_null() {
            return Ok("NULL".to_string());
        }

        match hint {
            TypeHint::Text => match value {
                Value::String(s) => self.quote_text(s, type_hint),
                Value::Number(n) => self.quote_text(&n.to_string(), type_hint),
                Value::Bool(b) => self.quote_text(&b.to_string(), type_hint),
                other => Err(ExprError::invalid_value(
                    type_hint,
                    format!("cannot quote {other} as text"),
                )),
            },
            TypeHint::Integer => self.quote_integer(value, type_hint),
            TypeHint::Float => self.quote_float(value, type_hint),
            TypeHint::Boolean => match value {
                Value::Bool(true) => Ok("TRUE".to_string()),
                Value::Bool(false) => Ok("FALSE".to_string()),
                other => Err(ExprError::invalid_value(
                    type_hint,
                    format!("expected a boolean, got {other}"),
                )),
            },
            TypeHint::Json => {
                let json = serde_json::to_string(value)
                    .map_err(|e| ExprError::invalid_value(type_hint, e.to_string()))?;
                self.quote_text(&json, type_hint)
            }
        }
    }
}
