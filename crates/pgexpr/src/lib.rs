//! # pgexpr
//!
//! Boolean predicate fragments for SQL query builders.
//!
//! ## Features
//!
//! - **Composite groups**: AND/OR groups with explicit, unambiguous parenthesization
//! - **Comparison builder**: `=`, `<>`, `<`, `<=`, `>`, `>=`, LIKE, IN, NULL checks
//! - **Pluggable quoting**: literals go through a single [`Quoter`] capability
//! - **No hidden quoting**: operands are used exactly as given
//!
//! ## Example
//!
//! ```ignore
//! use pgexpr::ExprBuilder;
//!
//! let expr = ExprBuilder::postgres();
//!
//! let groups = expr.or_x([expr.eq("u.group_id", "1"), expr.eq("u.group_id", "2")]);
//! let filter = expr.and_x([expr.eq("u.user", "1"), groups.to_string()]);
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "(u.user = 1) AND ((u.group_id = 1) OR (u.group_id = 2))"
//! );
//! ```
//!
//! The rendered string is meant to be placed into a larger statement, e.g. after
//! `WHERE`.

pub mod builder;
pub mod comparison;
pub mod composite;
pub mod error;
pub mod quote;

pub use builder::ExprBuilder;
pub use comparison::CompareOp;
pub use composite::{Composite, LogicalOp};
pub use error::{ExprError, ExprResult};
pub use quote::{PgQuoter, Quoter, TypeHint};
