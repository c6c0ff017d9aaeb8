//! Parsing of JSON expression input.

use crate::response::ApiError;
use serde_json::{Value, error::Category};
use std::io::Read;
use tally::{CalculateOptions, ValidationError};

/// Deepest tree `serde_json` will parse: each operation level costs one
/// object and one array against its recursion limit of 128.
pub const MAX_PARSE_DEPTH: usize = 64;

/// Parse an expression, reporting input too deep to parse as
/// [`ValidationError::TooDeep`] rather than as malformed JSON.
pub fn read_expression<R: Read>(reader: R, options: &CalculateOptions) -> Result<Value, ApiError> {
    serde_json::from_reader(reader).map_err(|e| match e.classify() {
        Category::Io => ApiError::Internal {
            detail: e.to_string(),
        },
        Category::Syntax if e.to_string().starts_with("recursion limit exceeded") => {
            ApiError::Calculation(
                ValidationError::TooDeep {
                    max_depth: options.validator.max_depth,
                }
                .into(),
            )
        }
        _ => ApiError::InvalidJson(e),
    })
}
