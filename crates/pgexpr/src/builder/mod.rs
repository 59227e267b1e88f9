//! SQL predicate builder.
//!
//! [`ExprBuilder`] produces comparison fragments and [`Composite`] groupings.
//! Operands are taken as already-rendered SQL (columns, placeholders or
//! literals); nothing is quoted implicitly. Use [`ExprBuilder::literal`] to
//! turn a raw value into a safe literal first.
//!
//! # Example
//! ```ignore
//! use pgexpr::ExprBuilder;
//! use serde_json::json;
//!
//! let expr = ExprBuilder::postgres();
//! let name = expr.literal(&json!("alice"), "string")?;
//!
//! let filter = expr.and_x([
//!     expr.eq("u.name", &name),
//!     expr.or_x([expr.is_null("u.deleted"), expr.gt("u.deleted", "NOW()")]).to_string(),
//! ]);
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "(u.name = 'alice') AND ((u.deleted IS NULL) OR (u.deleted > NOW()))"
//! );
//! # Ok::<(), pgexpr::ExprError>(())
//! ```

use crate::comparison::CompareOp;
use crate::composite::{Composite, LogicalOp};
use crate::quote::{PgQuoter, Quoter};
use serde_json::Value;
use std::fmt::Display;

/// Stateless builder for SQL predicate fragments.
///
/// The quoter is only consulted by [`ExprBuilder::literal`]; every other method
/// is a pure string transformation and is available for any `Q`.
#[derive(Debug, Clone)]
pub struct ExprBuilder<Q = PgQuoter> {
    quoter: Q,
}

impl ExprBuilder {
    /// Create a builder backed by a default [`PgQuoter`].
    pub fn postgres() -> Self {
        Self::new(PgQuoter::new())
    }
}

impl Default for ExprBuilder {
    fn default() -> Self {
        Self::postgres()
    }
}

impl<Q> ExprBuilder<Q> {
    /// Create a builder backed by `quoter`.
    pub fn new(quoter: Q) -> Self {
        Self { quoter }
    }

    /// The quoting capability used by [`ExprBuilder::literal`].
    pub fn quoter(&self) -> &Q {
        &self.quoter
    }

    /// Create a conjunction of the given boolean expressions.
    ///
    /// ```ignore
    /// // (u.type = ?) AND (u.role = ?)
    /// expr.and_x(["u.type = ?", "u.role = ?"])
    /// ```
    pub fn and_x<I, S>(&self, parts: I) -> Composite
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Composite::new(LogicalOp::And, parts)
    }

    /// Create a disjunction of the given boolean expressions.
    ///
    /// ```ignore
    /// // (u.type = ?) OR (u.role = ?)
    /// expr.or_x(["u.type = ?", "u.role = ?"])
    /// ```
    pub fn or_x<I, S>(&self, parts: I) -> Composite
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Composite::new(LogicalOp::Or, parts)
    }

    /// Create a comparison: `x <op> y`
    pub fn comparison(&self, x: &str, op: CompareOp, y: &str) -> String {
        format!("{} {} {}", x, op.as_str(), y)
    }

    /// Create an equality comparison: `x = y`
    pub fn eq(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Eq, y)
    }

    /// Create a non-equality comparison: `x <> y`
    pub fn neq(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Neq, y)
    }

    /// Create a lower-than comparison: `x < y`
    pub fn lt(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Lt, y)
    }

    /// Create a lower-than-or-equal comparison: `x <= y`
    pub fn lte(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Lte, y)
    }

    /// Create a greater-than comparison: `x > y`
    pub fn gt(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Gt, y)
    }

    /// Create a greater-than-or-equal comparison: `x >= y`
    pub fn gte(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Gte, y)
    }

    /// Create an IS NULL check: `x IS NULL`
    pub fn is_null(&self, x: &str) -> String {
        format!("{} IS NULL", x)
    }

    /// Create an IS NOT NULL check: `x IS NOT NULL`
    pub fn is_not_null(&self, x: &str) -> String {
        format!("{} IS NOT NULL", x)
    }

    /// Create a LIKE comparison: `x LIKE y`
    pub fn like(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::Like, y)
    }

    /// Create a NOT LIKE comparison: `x NOT LIKE y`
    pub fn not_like(&self, x: &str, y: &str) -> String {
        self.comparison(x, CompareOp::NotLike, y)
    }

    /// Create an IN comparison: `x IN (v0, v1, ...)`
    ///
    /// Values are rendered with [`Display`] and are not quoted. A single
    /// placeholder such as `?` or `:values` passes through unchanged.
    pub fn in_list<I, V>(&self, x: &str, values: I) -> String
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.comparison(x, CompareOp::In, &value_list(values))
    }

    /// Create a NOT IN comparison: `x NOT IN (v0, v1, ...)`
    ///
    /// See [`ExprBuilder::in_list`].
    pub fn not_in<I, V>(&self, x: &str, values: I) -> String
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        self.comparison(x, CompareOp::NotIn, &value_list(values))
    }
}

impl<Q: Quoter> ExprBuilder<Q> {
    /// Quote a raw value as a SQL literal of type `type_hint`.
    ///
    /// The quoter's output and errors are returned unchanged.
    pub fn literal(&self, value: &Value, type_hint: &str) -> Result<String, Q::Error> {
        let quoted = self.quoter.quote(value, type_hint);

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &quoted {
                tracing::debug!(type_hint, error = %err, "literal quoting failed");
            }
        }

        quoted
    }
}

fn value_list<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Display,
{
    let rendered: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("({})", rendered.join(", "))
}
