//! Recursive validation walk.

use crate::{
    expr::{ExpressionNode, OperatorKind},
    validator::{ValidationError, ValidatorOptions},
};
use serde_json::{Map, Value};

/// Builds an expression tree from JSON, tracking nesting depth.
pub(super) struct Validator<'a> {
    options: &'a ValidatorOptions,
    depth: usize,
}

impl<'a> Validator<'a> {
    pub(super) fn new(options: &'a ValidatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    pub(super) fn validate(&mut self, input: &Value) -> Result<ExpressionNode, ValidationError> {
        if self.depth >= self.options.max_depth {
            tracing::debug!(max_depth = self.options.max_depth, "expression too deep");
            return Err(ValidationError::TooDeep {
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.validate_inner(input);
        self.depth -= 1;

        result
    }

    fn validate_inner(&mut self, input: &Value) -> Result<ExpressionNode, ValidationError> {
        match input {
            Value::Number(number) => number
                .as_f64()
                .and_then(ExpressionNode::literal)
                .ok_or(ValidationError::NotANodeOrNumber),
            Value::Object(fields) => self.validate_operation(fields),
            _ => Err(ValidationError::NotANodeOrNumber),
        }
    }

    fn validate_operation(
        &mut self,
        fields: &Map<String, Value>,
    ) -> Result<ExpressionNode, ValidationError> {
        let (Some(op), Some(args)) = (fields.get("op"), fields.get("args")) else {
            return Err(ValidationError::NotANodeOrNumber);
        };

        let op = match op {
            Value::String(name) => name.parse::<OperatorKind>()?,
            // Report non-string operators by their JSON text.
            other => return Err(ValidationError::UnsupportedOperator(other.to_string())),
        };

        let Value::Array(items) = args else {
            return Err(ValidationError::ArgsNotAList(op));
        };
        if items.is_empty() {
            return Err(ValidationError::EmptyArgs(op));
        }

        tracing::trace!(%op, arity = items.len(), depth = self.depth, "validating operation");

        let args = items
            .iter()
            .map(|item| self.validate(item))
            .collect::<Result<Vec<_>, _>>()?;

        ExpressionNode::operation(op, args)
    }
}
