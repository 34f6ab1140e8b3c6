//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Bosun - Shell-command toolkit for standing up server stacks.
#[derive(Debug, Parser)]
#[command(name = "bosun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Preview commands without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase diagnostic output (repeat up to -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Working directory for commands (overrides current directory)
    #[arg(long, global = true)]
    pub directory: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a command through the executor
    Exec(ExecArgs),

    /// Install packages with the system's package manager
    Install(InstallArgs),

    /// Download a file with curl
    Download(DownloadArgs),

    /// Create an archive from a file or directory
    Archive(ArchiveArgs),

    /// Extract an archive
    Extract(ExtractArgs),

    /// Control a system service
    Service(ServiceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Command to run (words are joined into one shell command line)
    #[arg(required = true, num_args = 1..)]
    pub command: Vec<String>,

    /// Working directory for this command only
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Capture stdout and print it after the command exits
    #[arg(long)]
    pub capture: bool,

    /// Treat a non-zero exit as an error
    #[arg(long)]
    pub check: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Packages to install
    #[arg(required = true, num_args = 1..)]
    pub packages: Vec<String>,

    /// Skip the already-installed check
    #[arg(long)]
    pub no_check: bool,
}

/// Arguments for the `download` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DownloadArgs {
    /// URL to download
    pub url: String,

    /// Destination path (defaults to curl's stdout behavior)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `archive` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ArchiveArgs {
    /// File or directory to archive
    pub source: PathBuf,

    /// Archive file to create
    pub archive: PathBuf,

    /// Archive format
    #[arg(short, long, default_value = "tar.gz")]
    pub format: String,
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Archive file to extract
    pub archive: PathBuf,

    /// Directory to extract into
    #[arg(short, long)]
    pub destination: Option<PathBuf>,
}

/// Service actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
    Status,
}

/// Arguments for the `service` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ServiceArgs {
    /// Action to perform
    #[arg(value_enum)]
    pub action: ServiceAction,

    /// Service name (e.g. nginx, php8.3-fpm)
    pub name: String,

    /// After starting, wait for this TCP port to accept connections
    #[arg(long)]
    pub wait_port: Option<u16>,

    /// Readiness timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
