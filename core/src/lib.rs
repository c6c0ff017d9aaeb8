//! Arithmetic expression trees: validation, evaluation, and the two-operand
//! operators shared with the HTTP endpoints.

pub mod api;
pub mod evaluator;
pub mod expr;
pub mod validator;
