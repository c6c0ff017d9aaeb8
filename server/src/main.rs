use clap::Parser;
use std::process::ExitCode;
use tally_server::cli::{Cli, Command};

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level. Default to INFO when serving and
    // WARN for one-off evaluation.
    let default_level = match cli.command {
        Command::Serve(_) => "info",
        Command::Eval(_) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve(args) => {
            tally_server::server::serve(args.settings())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval(args) => tally_server::eval::run(args),
    }
}
