//! Error rendering using miette
//!
//! Renders tally errors with their diagnostic code and help text, for
//! terminals and logs.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use serde_json::json;
/// use tally::{CalculateOptions, calculate, render_error};
///
/// match calculate(&json!({"op": "divide", "args": [1, 0]}), &CalculateOptions::default()) {
///     Err(e) => render_error(&e),
///     Ok(_) => {}
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs and UIs)
pub fn render_error_to_string(error: &Error) -> String {
    render_report(error, true)
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render_report(error, false)
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    writer.write_all(render_report(error, use_color).as_bytes())
}

fn render_report(error: &Error, use_color: bool) -> String {
    let theme = if use_color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme).with_width(160);

    let mut out = String::new();
    if handler.render_report(&mut out, error).is_err() {
        // Fall back to the plain message.
        out = format!("Error: {error}\n");
    }
    out
}
