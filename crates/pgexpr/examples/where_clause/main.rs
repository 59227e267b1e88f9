//! Build a WHERE clause from nested predicate groups.
//!
//! Run with: cargo run --example where_clause -p pgexpr

use pgexpr::{ExprBuilder, ExprResult};
use serde_json::json;

fn main() -> ExprResult<()> {
    let expr = ExprBuilder::postgres();

    let status = expr.literal(&json!("active"), "string")?;
    let min_age = expr.literal(&json!(18), "integer")?;

    // Either an admin, or a member of one of the staff groups.
    let access = expr.or_x([
        expr.eq("u.role", "'admin'"),
        expr.in_list("u.group_id", [3, 4, 7]),
    ]);

    let mut filter = expr.and_x([expr.eq("u.status", &status), expr.gte("u.age", &min_age)]);
    filter.add_composite(&access);
    filter.add(expr.is_null("u.deleted_at"));

    println!("SELECT u.* FROM users u WHERE {filter}");
    Ok(())
}
