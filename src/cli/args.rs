//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::indices::CandidateIndices;

/// Probe UVC cameras by index and report their USB vendor and product IDs
#[derive(Parser, Debug)]
#[command(name = "uvc-scan")]
#[command(version, about = "Probe UVC cameras and report their USB IDs", long_about = None)]
#[command(after_help = "EXAMPLES:
    uvc-scan                  # Probe cameras 0-3
    uvc-scan --indices 0-7    # Probe cameras 0 through 7
    uvc-scan -i 0,2 -f json   # Probe cameras 0 and 2, print JSON
    uvc-scan list             # List attached UVC devices")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera indices to probe: N, A-B or a comma-separated list (default: 0-3)
    #[arg(long, short)]
    pub indices: Option<CandidateIndices>,

    /// Output format (default: text)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Probe candidate indices and report opened cameras (default)
    Scan,
    /// List attached UVC devices with bus and address
    List,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Log level from -v/-q, falling back to the configured level, then warn.
    pub fn log_level(&self, configured: Option<LevelFilter>) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => configured.unwrap_or(LevelFilter::Warn),
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
