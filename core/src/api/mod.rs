//! Public API for tally.
//!
//! This module is the boundary used by the HTTP server and the CLI. It glues
//! the validator and evaluator together and adds the final finiteness check
//! on the top-level result.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tally_core::api::{CalculateOptions, binary, calculate};
//! use tally_core::expr::OperatorKind;
//!
//! let input = json!({"op": "multiply", "args": [4, 5, 6]});
//! assert_eq!(calculate(&input, &CalculateOptions::default()).unwrap(), 120.0);
//!
//! assert_eq!(binary(OperatorKind::Root, 27.0, 3.0).unwrap(), 27f64.powf(1.0 / 3.0));
//! ```

pub mod calculate;
pub mod error;
pub mod options;

pub use calculate::{binary, calculate};
pub use error::Error;
pub use options::CalculateOptions;
