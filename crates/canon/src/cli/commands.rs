//! Command-line arguments.

use canon_core::{CanonLayout, CanonPaths};
use canon_error::CanonResult;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Canon - continuity checks, validation and Markdown conversion.
#[derive(Parser, Debug)]
#[command(name = "canon")]
#[command(about = "Continuity checking and validation for YAML story canon")]
#[command(version)]
pub struct Cli {
    /// Repository root directory
    #[arg(long, env = "CANON_REPO_ROOT", default_value = ".", global = true)]
    pub repo_root: PathBuf,

    /// Layout file overriding the default source locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolves the layout of the selected repository.
    ///
    /// An explicit `--config` must exist; otherwise `canon.toml` at the
    /// repository root is used when present.
    pub fn paths(&self) -> CanonResult<CanonPaths> {
        let layout = CanonLayout::discover(&self.repo_root, self.config.as_deref())?;
        Ok(layout.resolve(&self.repo_root))
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check scene references against canon
    Continuity {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Validate YAML canon against entity schemas
    Validate {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate the Markdown canon
    ValidateMarkdown {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Convert the YAML canon into Markdown files
    Convert {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output for tooling
    Json,
}
