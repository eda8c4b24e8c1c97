//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Stage Based Messaging command line utility.
#[derive(Debug, Parser)]
#[command(name = "sbmctl")]
#[command(version, about = "Stage Based Messaging command line utility.", long_about = None)]
pub struct Cli {
    /// Service base URL.
    #[arg(
        long,
        env = "SBM_URL",
        default_value = "http://localhost:8000/api/v1"
    )]
    pub base_url: String,

    /// API token sent as `Authorization: Token <token>`.
    #[arg(long, env = "SBM_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "summary")]
    pub format: OutputFormat,

    /// Suppress per-record output lines.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with resource-specific lines.
    #[default]
    Summary,
    /// Raw JSON output.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all schedules
    SbmSchedules,
    /// List all messagesets
    SbmMessagesets,
    /// List all messages
    SbmMessages {
        /// Message ID to fetch instead of listing all messages.
        #[arg(long)]
        message: Option<u64>,
    },
    /// Delete all messages matching filter
    SbmMessagesDelete {
        /// Message ID to delete; all messages when omitted.
        #[arg(long)]
        message: Option<u64>,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Import to the Stage Based Messaging service.
    #[command(verbatim_doc_comment)]
    SbmMessagesImport {
        /// CSV file with a header row.
        #[arg(long)]
        csv: Option<PathBuf>,
        /// JSON file containing an object or a list of objects.
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Update messages in the Stage Based Messaging service.
    #[command(verbatim_doc_comment)]
    SbmMessagesUpdate {
        /// CSV file with a header row.
        #[arg(long)]
        csv: Option<PathBuf>,
        /// JSON file containing an object or a list of objects.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}
