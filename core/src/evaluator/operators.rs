//! Per-operator arithmetic.
//!
//! Every operator is a left fold over `first` and `rest`. The direct
//! two-operand endpoints call [`apply`] with a single-element `rest`, so both
//! paths share one definition of each operator.

use crate::{evaluator::EvalError, expr::OperatorKind};

/// Fold `rest` into `first` using `op`.
///
/// Follows IEEE 754 semantics: overflow and complex results surface as
/// infinity or NaN rather than errors. The only errors are a zero divisor for
/// `divide` and a zero degree for `root`, both checked before folding starts.
pub fn apply(op: OperatorKind, first: f64, rest: &[f64]) -> Result<f64, EvalError> {
    match op {
        OperatorKind::Add => Ok(rest.iter().fold(first, |acc, v| acc + v)),
        OperatorKind::Subtract => Ok(rest.iter().fold(first, |acc, v| acc - v)),
        OperatorKind::Multiply => Ok(rest.iter().fold(first, |acc, v| acc * v)),
        OperatorKind::Divide => {
            if rest.contains(&0.0) {
                return Err(EvalError::DivisionByZero);
            }
            Ok(rest.iter().fold(first, |acc, v| acc / v))
        }
        OperatorKind::Power => Ok(rest.iter().fold(first, |acc, v| acc.powf(*v))),
        OperatorKind::Root => {
            if rest.is_empty() {
                return Ok(first.sqrt());
            }
            if rest.contains(&0.0) {
                return Err(EvalError::ZeroDegreeRoot);
            }
            Ok(rest.iter().fold(first, |acc, n| acc.powf(1.0 / n)))
        }
    }
}
