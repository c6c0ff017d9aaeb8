//! The `eval` subcommand: evaluate one expression from the command line.

use crate::{body::read_expression, cli::EvalArgs, response::ApiError};
use miette::{Context, IntoDiagnostic, miette};
use std::io::Read;
use std::process::ExitCode;
use tally::{CalculateOptions, calculate, render_error};

pub fn run(args: &EvalArgs) -> miette::Result<ExitCode> {
    let source = match &args.expression {
        Some(expression) => expression.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("failed to read expression from stdin")?;
            buf
        }
    };

    match evaluate_source(&source, &CalculateOptions::with_max_depth(args.max_depth)) {
        Ok(result) => {
            println!("{result}");
            Ok(ExitCode::SUCCESS)
        }
        Err(ApiError::Calculation(e)) => {
            render_error(&e);
            Ok(ExitCode::FAILURE)
        }
        Err(ApiError::InvalidJson(e)) => Err::<ExitCode, _>(e).into_diagnostic().wrap_err("expression is not valid JSON"),
        Err(e) => Err(miette!("{e}")),
    }
}

/// Parse and evaluate a JSON expression.
pub fn evaluate_source(source: &str, options: &CalculateOptions) -> Result<f64, ApiError> {
    let input = read_expression(source.as_bytes(), options)?;
    Ok(calculate(&input, options)?)
}
