//! Runtime arithmetic errors.
//!
//! These can only arise from the values in a tree, never from its shape.
//! The messages match the ones used by the direct two-operand endpoints.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum EvalError {
    /// A divisor after the first argument of `divide` is zero.
    #[error("Cannot divide by zero.")]
    #[diagnostic(code(tally::evaluation::division_by_zero))]
    DivisionByZero,

    /// A degree after the first argument of `root` is zero.
    #[error("Cannot extract root with degree zero.")]
    #[diagnostic(code(tally::evaluation::zero_degree_root))]
    ZeroDegreeRoot,

    /// An intermediate or final value is NaN or infinite.
    #[error("Result is not a finite number.")]
    #[diagnostic(
        code(tally::evaluation::non_finite_value),
        help("an intermediate result overflowed or has no real value")
    )]
    NonFiniteValue,
}
