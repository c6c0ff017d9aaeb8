//! Tree-walking evaluator for validated expression trees.
//!
//! The evaluator reduces an [`ExpressionNode`] to a single `f64`. Children are
//! evaluated before their parent, left to right, and each operator folds its
//! argument values from the left.
//!
//! ## Design Principles
//!
//! - **Never panic**: domain errors become [`EvalError`] values
//! - **Pure**: no state survives a call, so repeated evaluation is bit-identical
//! - **Validated input only**: structural problems are the validator's job
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tally_core::{evaluator, validator};
//!
//! let tree = validator::validate(&json!({"op": "subtract", "args": [10, 4, 3]})).unwrap();
//! assert_eq!(evaluator::evaluate(&tree), Ok(3.0));
//! ```

mod error;
mod eval;
pub mod operators;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;

use crate::expr::ExpressionNode;

/// Evaluate a validated expression tree.
///
/// The result of the root node itself is not checked for finiteness; use
/// [`api::calculate`](crate::api::calculate) for that.
pub fn evaluate(node: &ExpressionNode) -> Result<f64, EvalError> {
    eval::Evaluator.eval(node)
}
