//! Canon command-line tool.

use canon::cli::{
    Cli, Commands, handle_continuity_command, handle_convert_command,
    handle_validate_markdown_command, handle_validate_command,
};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let paths = cli.paths()?;
    tracing::info!(root = %paths.root().display(), "Repository resolved");

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Continuity { format } => handle_continuity_command(&paths, *format, &mut stdout),
        Commands::Validate { format, strict } => {
            handle_validate_command(&paths, *format, *strict, &mut stdout)
        }
        Commands::ValidateMarkdown { format, strict } => {
            handle_validate_markdown_command(&paths, *format, *strict, &mut stdout)
        }
        Commands::Convert { format } => handle_convert_command(&paths, *format, &mut stdout),
    }
}
