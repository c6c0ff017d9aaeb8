//! Structural validation errors.
//!
//! These describe input that is not a well-formed expression tree. They are
//! raised before any arithmetic happens and never overlap with
//! [`EvalError`](crate::evaluator::EvalError).

use crate::expr::OperatorKind;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    /// Input is neither a finite number nor an object with `op` and `args`.
    #[error("Invalid expression: each node must be a finite number or an object with \"op\" and \"args\".")]
    #[diagnostic(
        code(tally::validation::not_a_node_or_number),
        help(r#"write nodes as {{"op": "add", "args": [1, 2]}} or as plain numbers"#)
    )]
    NotANodeOrNumber,

    /// `op` is not one of the supported operator names.
    #[error(
        "Unsupported operator {0:?}. Supported operators: {names}.",
        names = OperatorKind::supported_names()
    )]
    #[diagnostic(code(tally::validation::unsupported_operator))]
    UnsupportedOperator(String),

    /// `args` is present but is not an array.
    #[error("The \"args\" of operator \"{0}\" must be an array.")]
    #[diagnostic(code(tally::validation::args_not_a_list))]
    ArgsNotAList(OperatorKind),

    /// `args` is an empty array.
    #[error("Operator \"{0}\" requires at least one argument.")]
    #[diagnostic(code(tally::validation::empty_args))]
    EmptyArgs(OperatorKind),

    /// The tree nests deeper than the configured limit.
    #[error("Expression exceeds the maximum nesting depth of {max_depth}.")]
    #[diagnostic(
        code(tally::validation::too_deep),
        help("flatten the expression: operators accept any number of arguments")
    )]
    TooDeep { max_depth: usize },
}
