//! CLI argument definitions using clap.
//!
//! Running `keyaudit` with no arguments performs the audit with default
//! settings; the subcommands exist for overrides and project setup.
//!
//! ## Commands
//!
//! - `audit`: Audit translation key usage against the reference locale
//! - `init`: Initialize keyaudit configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by audit invocations.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Reference locale file (overrides config file)
    #[arg(long)]
    pub reference_file: Option<PathBuf>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Parser)]
pub struct AuditArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Default, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub args: AuditArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit translation key usage against the reference locale (default)
    Audit(AuditCommand),
    /// Initialize a new .keyauditrc.json configuration file
    Init,
}
