use super::{Composite, LogicalOp};

struct Fixture {
    op: LogicalOp,
    parts: Vec<String>,
    expected: &'static str,
}

fn fixture(op: LogicalOp, parts: &[&str], expected: &'static str) -> Fixture {
    Fixture {
        op,
        parts: parts.iter().map(|p| p.to_string()).collect(),
        expected,
    }
}

fn render_fixtures() -> Vec<Fixture> {
    let or_groups = Composite::or(["u.group_id = 1", "u.group_id = 2"]).to_string();
    let and_user = Composite::and(["u.user = 1", "u.group_id = 2"]).to_string();

    vec![
        fixture(LogicalOp::And, &["u.user = 1"], "u.user = 1"),
        fixture(
            LogicalOp::And,
            &["u.user = 1", "u.group_id = 1"],
            "(u.user = 1) AND (u.group_id = 1)",
        ),
        fixture(LogicalOp::Or, &["u.user = 1"], "u.user = 1"),
        fixture(
            LogicalOp::Or,
            &["u.group_id = 1", "u.group_id = 2"],
            "(u.group_id = 1) OR (u.group_id = 2)",
        ),
        fixture(
            LogicalOp::And,
            &["u.user = 1", or_groups.as_str()],
            "(u.user = 1) AND ((u.group_id = 1) OR (u.group_id = 2))",
        ),
        fixture(
            LogicalOp::Or,
            &["u.group_id = 1", and_user.as_str()],
            "(u.group_id = 1) OR ((u.user = 1) AND (u.group_id = 2))",
        ),
    ]
}

#[test]
fn test_render_from_initial_parts() {
    for f in render_fixtures() {
        let composite = Composite::new(f.op, f.parts);
        assert_eq!(composite.to_string(), f.expected);
    }
}

#[test]
fn test_render_from_added_parts() {
    for f in render_fixtures() {
        let mut composite = Composite::new(f.op, Vec::<String>::new());
        for part in f.parts {
            composite.add(part);
        }
        assert_eq!(composite.to_sql(), f.expected);
    }
}

#[test]
fn test_len_tracks_add() {
    let mut expr = Composite::or(["u.group_id = 1"]);
    assert_eq!(expr.len(), 1);

    expr.add("u.group_id = 2");
    assert_eq!(expr.len(), 2);

    expr.add("u.group_id = 3");
    assert_eq!(expr.len(), 3);
    assert_eq!(
        expr.parts(),
        ["u.group_id = 1", "u.group_id = 2", "u.group_id = 3"]
    );
}

#[test]
fn test_empty_renders_nothing() {
    let expr = Composite::and(Vec::<String>::new());
    assert!(expr.is_empty());
    assert_eq!(expr.len(), 0);
    assert_eq!(expr.to_string(), "");
}

#[test]
fn test_single_part_is_not_wrapped() {
    let expr = Composite::or(["a = 1 OR b = 2"]);
    assert_eq!(expr.to_string(), "a = 1 OR b = 2");
}

#[test]
fn test_three_parts() {
    let expr = Composite::and(["a = 1", "b = 2", "c = 3"]);
    assert_eq!(expr.to_string(), "(a = 1) AND (b = 2) AND (c = 3)");
}

#[test]
fn test_empty_part_rendered_verbatim() {
    let expr = Composite::and(["a = 1", ""]);
    assert_eq!(expr.to_string(), "(a = 1) AND ()");
}

#[test]
fn test_add_composite_nests_rendering() {
    let inner = Composite::or(["u.group_id = 1", "u.group_id = 2"]);
    let mut outer = Composite::and(["u.user = 1"]);
    outer.add_composite(&inner);

    let mut manual = Composite::and(["u.user = 1"]);
    manual.add(inner.to_string());

    assert_eq!(outer, manual);
    assert_eq!(
        outer.to_string(),
        "(u.user = 1) AND ((u.group_id = 1) OR (u.group_id = 2))"
    );
}

#[test]
fn test_render_is_idempotent() {
    let expr = Composite::or(["a = 1", "b = 2"]);
    let first = expr.to_string();
    let second = expr.to_string();
    assert_eq!(first, second);
    assert_eq!(expr.len(), 2);
}

#[test]
fn test_extend_and_into_string() {
    let mut expr = Composite::default();
    assert_eq!(expr.op(), LogicalOp::And);

    expr.extend(["a = 1", "b = 2"]);
    let sql: String = expr.into();
    assert_eq!(sql, "(a = 1) AND (b = 2)");
}

#[test]
fn test_logical_op_keywords() {
    assert_eq!(LogicalOp::And.to_string(), "AND");
    assert_eq!(LogicalOp::Or.as_str(), "OR");
}
