//! Unit tests for the evaluator.

use super::*;
use crate::{
    expr::{ExpressionNode, OperatorKind},
    validator,
};
use serde_json::{Value, json};

fn run(input: Value) -> Result<f64, EvalError> {
    let tree = validator::validate(&input).expect("validation failed");
    evaluate(&tree)
}

fn lit(value: f64) -> ExpressionNode {
    ExpressionNode::Literal(value)
}

fn node(op: OperatorKind, args: Vec<ExpressionNode>) -> ExpressionNode {
    ExpressionNode::operation(op, args).unwrap()
}

#[test]
fn test_literal() {
    assert_eq!(evaluate(&lit(3.5)), Ok(3.5));
}

#[test]
fn test_binary_matches_ieee() {
    let pairs = [(1.5, 2.25), (-3.0, 7.0), (0.1, 0.2), (1e300, 1e10), (2.0, -0.5)];
    for (a, b) in pairs {
        assert_eq!(run(json!({"op": "add", "args": [a, b]})), Ok(a + b));
        assert_eq!(run(json!({"op": "subtract", "args": [a, b]})), Ok(a - b));
        assert_eq!(run(json!({"op": "multiply", "args": [a, b]})), Ok(a * b));
        assert_eq!(run(json!({"op": "divide", "args": [a, b]})), Ok(a / b));
    }
    assert_eq!(run(json!({"op": "power", "args": [2.5, 3]})), Ok(2.5f64.powf(3.0)));
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(
        run(json!({"op": "divide", "args": [5, 0]})),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_root() {
    assert_eq!(run(json!({"op": "root", "args": [2]})), Ok(2f64.sqrt()));
    assert_eq!(run(json!({"op": "root", "args": [81, 4]})), Ok(81f64.powf(1.0 / 4.0)));
}

#[test]
fn test_root_zero_degree_in_tree() {
    assert_eq!(
        run(json!({"op": "root", "args": [8, {"op": "subtract", "args": [3, 3]}]})),
        Err(EvalError::ZeroDegreeRoot)
    );
}

#[test]
fn test_subtract_left_associative() {
    let (a, b, c) = (10.0, 4.0, 3.0);
    assert_eq!(run(json!({"op": "subtract", "args": [a, b, c]})), Ok((a - b) - c));
    assert_ne!(run(json!({"op": "subtract", "args": [a, b, c]})), Ok(a - (b - c)));
}

#[test]
fn test_nested_tree() {
    let input = json!({
        "op": "add",
        "args": [1, {"op": "power", "args": [2, 3]}, {"op": "multiply", "args": [4, 5, 6]}]
    });
    assert_eq!(run(input), Ok(129.0));
}

#[test]
fn test_divisor_computed_by_subtree() {
    let input = json!({"op": "divide", "args": [1, {"op": "multiply", "args": [0, 5]}]});
    assert_eq!(run(input), Err(EvalError::DivisionByZero));
}

#[test]
fn test_non_finite_child_is_rejected() {
    // 10^400 overflows to infinity inside the tree.
    let input = json!({"op": "add", "args": [1, {"op": "power", "args": [10, 400]}]});
    assert_eq!(run(input), Err(EvalError::NonFiniteValue));
}

#[test]
fn test_nan_child_is_rejected() {
    let input = json!({"op": "multiply", "args": [{"op": "root", "args": [-4]}, 2]});
    assert_eq!(run(input), Err(EvalError::NonFiniteValue));
}

#[test]
fn test_root_result_is_not_rechecked() {
    let tree = node(OperatorKind::Power, vec![lit(10.0), lit(400.0)]);
    assert_eq!(evaluate(&tree), Ok(f64::INFINITY));
}

#[test]
fn test_first_failure_short_circuits() {
    // The first argument fails with DivisionByZero; the second would fail with
    // ZeroDegreeRoot if it were evaluated.
    let input = json!({
        "op": "add",
        "args": [
            {"op": "divide", "args": [1, 0]},
            {"op": "root", "args": [1, 0]}
        ]
    });
    assert_eq!(run(input), Err(EvalError::DivisionByZero));
}

#[test]
fn test_evaluation_is_idempotent() {
    let tree = validator::validate(&json!({
        "op": "divide",
        "args": [{"op": "root", "args": [2, 3]}, 7, {"op": "power", "args": [1.1, 2.2]}]
    }))
    .unwrap();

    let first = evaluate(&tree).unwrap();
    let second = evaluate(&tree).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_deep_chain() {
    let mut input = json!(1);
    for _ in 0..60 {
        input = json!({"op": "add", "args": [input, 1]});
    }
    assert_eq!(run(input), Ok(61.0));
}

#[test]
fn test_evaluation_with_logging() {
    crate::test_utils::init_test_logging();
    assert_eq!(run(json!({"op": "root", "args": [16, 2, 2]})), Ok(2.0));
}
