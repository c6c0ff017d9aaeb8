#![allow(dead_code)]

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// The expression advertised by the discovery document: 1 + 2^3 + 4*5*6.
pub static EXAMPLE: Lazy<Value> = Lazy::new(|| {
    json!({
        "op": "add",
        "args": [1, {"op": "power", "args": [2, 3]}, {"op": "multiply", "args": [4, 5, 6]}]
    })
});

pub fn run(input: &Value) -> Result<f64, tally::Error> {
    tally::calculate(input, &tally::CalculateOptions::default())
}

/// Defines a test that runs `input` through the full pipeline and compares
/// the outcome with `result`.
macro_rules! test_case {
    ($name:ident, input: $input:expr, result: $result:expr $(,)?) => {
        #[test]
        fn $name() {
            let input: serde_json::Value = $input;
            pretty_assertions::assert_eq!(cases::run(&input), $result);
        }
    };
}
