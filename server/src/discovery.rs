//! The `GET /api` discovery document.

use serde::Serialize;
use serde_json::{Value, json};
use tally::OperatorKind;

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct Discovery {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<Endpoint>,
    pub example: Value,
}

/// Builds the discovery document listing every route.
pub fn document() -> Discovery {
    let mut endpoints: Vec<Endpoint> = OperatorKind::ALL
        .into_iter()
        .map(|op| Endpoint {
            method: "GET",
            path: format!("/api/{op}?v1=<number>&v2=<number>"),
            description: format!("Apply {op} to v1 and v2"),
        })
        .collect();

    endpoints.push(Endpoint {
        method: "POST",
        path: "/api/calculate".to_string(),
        description: format!(
            "Evaluate a JSON expression tree: a number or {{\"op\", \"args\"}} where op is one of {}",
            OperatorKind::supported_names()
        ),
    });

    Discovery {
        name: "tally",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
        example: example(),
    }
}

/// `1 + 2^3 + 4*5*6`, which evaluates to 129.
pub fn example() -> Value {
    json!({
        "op": "add",
        "args": [1, {"op": "power", "args": [2, 3]}, {"op": "multiply", "args": [4, 5, 6]}]
    })
}
