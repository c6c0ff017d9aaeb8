//! Command line interface.

use crate::{body::MAX_PARSE_DEPTH, settings::Settings};
use clap::{Args, Parser, Subcommand, builder::RangedU64ValueParser};
use std::path::PathBuf;
use tally::CalculateOptions;

/// tally - arithmetic over HTTP
#[derive(Parser, Debug)]
#[command(name = "tally-server", version)]
#[command(about = "Serve the tally arithmetic API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Evaluate a JSON expression tree and print the result
    Eval(EvalArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Directory of static files served for non-API requests
    #[arg(long, default_value = "public")]
    pub static_dir: PathBuf,

    /// Maximum nesting depth accepted by /api/calculate (at most 64)
    #[arg(long, default_value_t = MAX_PARSE_DEPTH, value_parser = max_depth_parser())]
    pub max_depth: usize,
}

impl ServeArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
            calculate: CalculateOptions::with_max_depth(self.max_depth),
        }
    }
}

fn max_depth_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_PARSE_DEPTH as u64)
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Maximum nesting depth of the expression (at most 64)
    #[arg(long, default_value_t = MAX_PARSE_DEPTH, value_parser = max_depth_parser())]
    pub max_depth: usize,

    /// Expression as JSON (if not provided, reads from stdin)
    pub expression: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["tally-server", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let settings = args.settings();
        assert_eq!(settings.bind_addr(), "127.0.0.1:3000");
        assert_eq!(settings.static_dir, PathBuf::from("public"));
        assert_eq!(settings.calculate.validator.max_depth, 64);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "tally-server",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "--max-depth",
            "32",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let settings = args.settings();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert_eq!(settings.calculate.validator.max_depth, 32);
    }

    #[test]
    fn test_max_depth_is_capped_by_parser_limit() {
        assert!(Cli::try_parse_from(["tally-server", "serve", "--max-depth", "64"]).is_ok());
        assert!(Cli::try_parse_from(["tally-server", "serve", "--max-depth", "65"]).is_err());
        assert!(Cli::try_parse_from(["tally-server", "eval", "--max-depth", "0", "1"]).is_err());
    }

    #[test]
    fn test_eval_expression_argument() {
        let cli = Cli::try_parse_from(["tally-server", "eval", r#"{"op":"add","args":[1,2]}"#])
            .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.expression.as_deref(), Some(r#"{"op":"add","args":[1,2]}"#));
    }
}
