//! tally - arithmetic over JSON expression trees
//!
//! # Overview
//!
//! An expression is either a finite number or an operator node
//! `{"op": <name>, "args": [<expression>, ...]}`. The supported operators are
//! `add`, `subtract`, `multiply`, `divide`, `power` and `root`; each folds its
//! arguments from the left, so `subtract [10, 4, 3]` is `(10 - 4) - 3`.
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use tally::{CalculateOptions, calculate};
//!
//! let expr = json!({
//!     "op": "add",
//!     "args": [1, {"op": "power", "args": [2, 3]}, {"op": "multiply", "args": [4, 5, 6]}]
//! });
//! assert_eq!(calculate(&expr, &CalculateOptions::default()).unwrap(), 129.0);
//! ```
//!
//! # Errors
//!
//! Malformed trees fail with a [`ValidationError`] before any arithmetic runs.
//! Arithmetic problems (division by zero, a zero-degree root, a value that is
//! not finite) fail with an [`EvalError`]. Both are wrapped by [`Error`], which
//! can be rendered for terminals with [`render_error`].

mod error_renderer;

pub use error_renderer::{render_error, render_error_to, render_error_to_string, render_error_to_string_no_color};

// Re-export public API from tally_core
pub use tally_core::api::{CalculateOptions, Error, binary, calculate};

// Re-export the expression model
pub use tally_core::expr::{ExpressionNode, Operation, OperatorKind};

// Re-export the pipeline stages and their errors
pub use tally_core::evaluator::{self, EvalError, evaluate};
pub use tally_core::validator::{self, ValidationError, ValidatorOptions, validate};
