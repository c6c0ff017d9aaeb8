//! Core evaluation logic.

use crate::{
    evaluator::{EvalError, operators},
    expr::{ExpressionNode, Operation},
};

/// Stateless evaluator. Depth is bounded by the validator that built the tree.
pub(super) struct Evaluator;

impl Evaluator {
    pub(super) fn eval(&self, node: &ExpressionNode) -> Result<f64, EvalError> {
        match node {
            ExpressionNode::Literal(value) => Ok(*value),
            ExpressionNode::Operation(operation) => self.eval_operation(operation),
        }
    }

    fn eval_operation(&self, operation: &Operation) -> Result<f64, EvalError> {
        // Stops at the first failing argument; later siblings are not evaluated.
        let values = operation
            .args()
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<f64>, _>>()?;

        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            tracing::debug!(op = %operation.op(), value = %bad, "non-finite operand");
            return Err(EvalError::NonFiniteValue);
        }

        let Some((first, rest)) = values.split_first() else {
            // Operation::new rejects empty argument lists.
            unreachable!("operation with no arguments")
        };

        let result = operators::apply(operation.op(), *first, rest);
        tracing::trace!(op = %operation.op(), ?values, ?result, "evaluated operation");
        result
    }
}
