//! Structural validation of untyped expression input.
//!
//! The validator walks a [`serde_json::Value`] depth-first, left-to-right and
//! builds an [`ExpressionNode`](crate::expr::ExpressionNode). The first
//! structural problem aborts the walk; no partial tree is returned.
//!
//! Accepted shapes:
//!
//! - a finite JSON number, which becomes a literal
//! - an object `{"op": <name>, "args": [<node>, ...]}` with a supported
//!   operator name and a non-empty argument array
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tally_core::validator::validate;
//!
//! let tree = validate(&json!({"op": "add", "args": [1, 2]})).unwrap();
//! assert_eq!(tree.depth(), 2);
//! ```

mod error;
mod validate;


pub use error::ValidationError;

use crate::expr::ExpressionNode;
use serde_json::Value;

/// Limits applied while validating a tree.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Maximum nesting depth of the tree (a bare number has depth 1).
    ///
    /// Default: 64, which is also the deepest tree the server can parse.
    pub max_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Validate `input` with default limits.
pub fn validate(input: &Value) -> Result<ExpressionNode, ValidationError> {
    validate_with_options(input, &ValidatorOptions::default())
}

/// Validate `input` with custom limits.
pub fn validate_with_options(
    input: &Value,
    options: &ValidatorOptions,
) -> Result<ExpressionNode, ValidationError> {
    validate::Validator::new(options).validate(input)
}
