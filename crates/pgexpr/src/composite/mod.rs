//! Composite boolean expressions.
//!
//! A [`Composite`] holds an ordered list of SQL fragments joined by a single
//! [`LogicalOp`]. Nesting is done by rendering an inner composite and adding the
//! result as one part of an outer one:
//!
//! ```ignore
//! use pgexpr::Composite;
//!
//! let groups = Composite::or(["u.group_id = 1", "u.group_id = 2"]);
//! let mut filter = Composite::and(["u.user = 1"]);
//! filter.add_composite(&groups);
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "(u.user = 1) AND ((u.group_id = 1) OR (u.group_id = 2))"
//! );
//! ```

use std::fmt;

/// Logical operator joining the parts of a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOp {
    /// Conjunction: all parts must hold.
    #[default]
    And,
    /// Disjunction: at least one part must hold.
    Or,
}

impl LogicalOp {
    /// SQL keyword for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered group of SQL fragments joined by one logical operator.
///
/// Rendering (via [`Display`](fmt::Display) or [`Composite::to_sql`]):
/// - no parts: empty string
/// - one part: the part itself, without parentheses
/// - two or more: `(p0) OP (p1) OP (p2) ...`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composite {
    op: LogicalOp,
    parts: Vec<String>,
}

impl Composite {
    /// Create a composite with the given operator and initial parts.
    pub fn new<I, S>(op: LogicalOp, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            op,
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an AND composite.
    pub fn and<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LogicalOp::And, parts)
    }

    /// Create an OR composite.
    pub fn or<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LogicalOp::Or, parts)
    }

    /// The operator joining the parts.
    pub fn op(&self) -> LogicalOp {
        self.op
    }

    /// The parts in insertion order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the composite has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append a part. The fragment is not validated.
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Render `inner` and append the result as a single part.
    pub fn add_composite(&mut self, inner: &Composite) {
        self.parts.push(inner.to_sql());
    }

    /// Render the composite into a SQL fragment.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts.as_slice() {
            [] => Ok(()),
            [single] => f.write_str(single),
            [first, rest @ ..] => {
                write!(f, "({first})")?;
                for part in rest {
                    write!(f, " {} ({part})", self.op)?;
                }
                Ok(())
            }
        }
    }
}

impl<S: Into<String>> Extend<S> for Composite {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.parts.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Composite> for String {
    fn from(composite: Composite) -> Self {
        composite.to_sql()
    }
}

#[cfg(test)]
mod tests;
