//! Configuration options for calculations.

use crate::validator::ValidatorOptions;

/// Options for [`calculate`](crate::api::calculate).
///
/// # Example
///
/// ```
/// use tally_core::api::CalculateOptions;
/// use tally_core::validator::ValidatorOptions;
///
/// let options = CalculateOptions {
///     validator: ValidatorOptions { max_depth: 64 },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculateOptions {
    /// Limits applied while validating the input tree.
    pub validator: ValidatorOptions,
}

impl CalculateOptions {
    /// Options with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            validator: ValidatorOptions { max_depth },
        }
    }
}
