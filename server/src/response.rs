//! JSON response bodies and the mapping from errors to HTTP statuses.

use rouille::Response;
use serde::Serialize;
use tally::OperatorKind;

/// `200` body of the direct two-operand endpoints.
#[derive(Debug, Serialize)]
pub struct BinaryResponse {
    pub action: OperatorKind,
    pub v1: f64,
    pub v2: f64,
    pub result: f64,
}

/// `200` body of `POST /api/calculate`.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub action: &'static str,
    pub result: f64,
}

impl CalculateResponse {
    pub fn new(result: f64) -> Self {
        Self {
            action: "calculate",
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a handler can fail with. `Display` is the message sent to the
/// client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid parameters. Both v1 and v2 must be valid numbers.")]
    InvalidParameters,

    #[error("Invalid JSON body.")]
    InvalidJson(#[source] serde_json::Error),

    #[error(transparent)]
    Calculation(#[from] tally::Error),

    #[error("This endpoint does not exists.")]
    NotFound,

    /// Detail is logged, never sent to the client.
    #[error("Internal server error.")]
    Internal { detail: String },
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidParameters | ApiError::InvalidJson(_) | ApiError::Calculation(_) => 400,
            ApiError::NotFound => 404,
            ApiError::Internal { .. } => 500,
        }
    }

    pub fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { detail } => tracing::error!(%detail, "internal error"),
            ApiError::InvalidJson(source) => tracing::debug!(%source, "rejected request body"),
            ApiError::Calculation(err) => {
                tracing::debug!(category = err.category(), "calculation failed")
            }
            _ => {}
        }

        let status = self.status_code();
        Response::json(&ErrorResponse {
            error: self.to_string(),
        })
        .with_status_code(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally::EvalError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidParameters.status_code(), 400);
        assert_eq!(
            ApiError::Calculation(EvalError::DivisionByZero.into()).status_code(),
            400
        );
        assert_eq!(ApiError::NotFound.status_code(), 404);
        assert_eq!(
            ApiError::Internal {
                detail: "boom".into()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = ApiError::Internal {
            detail: "disk on fire".into(),
        };
        assert_eq!(err.to_string(), "Internal server error.");
    }

    #[test]
    fn test_binary_response_shape() {
        let body = serde_json::to_value(BinaryResponse {
            action: OperatorKind::Power,
            v1: 2.0,
            v2: 3.0,
            result: 8.0,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"action": "power", "v1": 2.0, "v2": 3.0, "result": 8.0})
        );
    }
}
