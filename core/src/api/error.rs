//! Public error type for tally operations.
//!
//! Wraps the two error families without merging them: structural problems
//! from the validator and arithmetic problems from the evaluator. `Display`
//! and the diagnostic code are those of the wrapped error.

use crate::{evaluator::EvalError, validator::ValidationError};
use miette::Diagnostic;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Evaluation(#[from] EvalError),
}

impl Error {
    /// Stable machine-readable category, e.g. `tally::evaluation::division_by_zero`.
    ///
    /// Always equal to the diagnostic code.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Validation(e) => match e {
                ValidationError::NotANodeOrNumber => "tally::validation::not_a_node_or_number",
                ValidationError::UnsupportedOperator(_) => "tally::validation::unsupported_operator",
                ValidationError::ArgsNotAList(_) => "tally::validation::args_not_a_list",
                ValidationError::EmptyArgs(_) => "tally::validation::empty_args",
                ValidationError::TooDeep { .. } => "tally::validation::too_deep",
            },
            Error::Evaluation(e) => match e {
                EvalError::DivisionByZero => "tally::evaluation::division_by_zero",
                EvalError::ZeroDegreeRoot => "tally::evaluation::zero_degree_root",
                EvalError::NonFiniteValue => "tally::evaluation::non_finite_value",
            },
        }
    }
}
