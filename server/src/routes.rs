//! Request routing and handlers.

use crate::{
    body::read_expression,
    discovery,
    response::{ApiError, BinaryResponse, CalculateResponse},
    settings::Settings,
};
use rouille::{Request, Response, router};
use std::any::Any;
use std::fs::File;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tally::OperatorKind;

/// Route a request. Every failure, including a panic in a handler, becomes a
/// JSON error body.
pub fn handle(request: &Request, settings: &Settings) -> Response {
    guard(|| route(request, settings))
}

/// Run `handler`, turning a panic into a `500` JSON response.
pub fn guard<F>(handler: F) -> Response
where
    F: FnOnce() -> Response,
{
    catch_unwind(AssertUnwindSafe(handler)).unwrap_or_else(|payload| {
        ApiError::Internal {
            detail: panic_message(payload.as_ref()),
        }
        .into_response()
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("handler panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("handler panicked: {message}")
    } else {
        "handler panicked".to_string()
    }
}

fn route(request: &Request, settings: &Settings) -> Response {
    let result = router!(request,
        (GET) (/api) => { Ok(Response::json(&discovery::document())) },
        (POST) (/api/calculate) => { calculate(request, settings) },
        (GET) (/api/{op: OperatorKind}) => { binary(request, op) },
        _ => { fallback(request, settings) }
    );

    result.unwrap_or_else(ApiError::into_response)
}

fn binary(request: &Request, op: OperatorKind) -> Result<Response, ApiError> {
    let v1 = number_param(request, "v1")?;
    let v2 = number_param(request, "v2")?;
    let result = tally::binary(op, v1, v2)?;

    Ok(Response::json(&BinaryResponse {
        action: op,
        v1,
        v2,
        result,
    }))
}

fn number_param(request: &Request, name: &str) -> Result<f64, ApiError> {
    request
        .get_param(name)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or(ApiError::InvalidParameters)
}

fn calculate(request: &Request, settings: &Settings) -> Result<Response, ApiError> {
    let body = request.data().ok_or_else(|| ApiError::Internal {
        detail: "request body already consumed".to_string(),
    })?;

    let input = read_expression(body, &settings.calculate)?;
    let result = tally::calculate(&input, &settings.calculate)?;
    Ok(Response::json(&CalculateResponse::new(result)))
}

/// `/api/` with a trailing slash, then static files, then 404.
fn fallback(request: &Request, settings: &Settings) -> Result<Response, ApiError> {
    let url = request.url();
    if request.method() != "GET" {
        return Err(ApiError::NotFound);
    }
    if url == "/api/" {
        return Ok(Response::json(&discovery::document()));
    }
    if url.starts_with("/api/") {
        return Err(ApiError::NotFound);
    }

    if url == "/" {
        return match File::open(settings.static_dir.join("index.html")) {
            Ok(file) => Ok(Response::from_file("text/html; charset=utf-8", file)),
            Err(_) => Err(ApiError::NotFound),
        };
    }

    let response = rouille::match_assets(request, &settings.static_dir);
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::NotFound)
    }
}
