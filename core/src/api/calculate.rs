//! Entry points that run the full validate/evaluate pipeline.

use super::{CalculateOptions, Error};
use crate::{
    evaluator::{self, EvalError, operators},
    expr::OperatorKind,
    validator,
};
use serde_json::Value;

/// Validate and evaluate a JSON expression tree.
///
/// Fails with [`EvalError::NonFiniteValue`] if the final result is NaN or
/// infinite, even though every intermediate value was finite.
pub fn calculate(input: &Value, options: &CalculateOptions) -> Result<f64, Error> {
    let tree = validator::validate_with_options(input, &options.validator)?;
    tracing::debug!(depth = tree.depth(), "expression validated");
    let result = evaluator::evaluate(&tree)?;
    ensure_finite(result)
}

/// Apply a single operator to exactly two operands.
///
/// Shares its arithmetic with the tree evaluator, so `divide` rejects a zero
/// divisor and `root` rejects a zero degree.
pub fn binary(op: OperatorKind, v1: f64, v2: f64) -> Result<f64, Error> {
    if !v1.is_finite() || !v2.is_finite() {
        return Err(EvalError::NonFiniteValue.into());
    }
    let result = operators::apply(op, v1, &[v2])?;
    ensure_finite(result)
}

fn ensure_finite(result: f64) -> Result<f64, Error> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFiniteValue.into())
    }
}
