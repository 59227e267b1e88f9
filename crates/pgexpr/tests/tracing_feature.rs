//! Runs the quoting paths that emit `tracing` events.
//!
//! Only built with `--features tracing`.

use pgexpr::{ExprBuilder, ExprError, PgQuoter};
use serde_json::json;

#[test]
fn literal_with_tracing_enabled() {
    let expr = ExprBuilder::new(PgQuoter::new());

    assert_eq!(expr.literal(&json!("a'b"), "text").unwrap(), "'a''b'");
    assert_eq!(expr.literal(&json!(7), "int").unwrap(), "7");
}

#[test]
fn failed_literal_with_tracing_enabled() {
    let expr = ExprBuilder::new(PgQuoter::new());

    let err = expr.literal(&json!(true), "smallint").unwrap_err();
    assert!(matches!(err, ExprError::InvalidValue { ref type_hint, .. } if type_hint == "smallint"));

    let err = expr.literal(&json!(1), "interval").unwrap_err();
    assert!(err.is_unsupported_type());
}
