//! # CLI Argument Definitions

use bitsd::domain::config::ContentPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "bitsmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Map raw BITS status/sensor JSON records into typed events")]
pub(crate) struct Cli {
    /// Configuration file (TOML). Defaults to `bitsmap.toml` when present.
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Handling of non-text message content (preserve, require-text, coerce-to-text)
    #[arg(long, global = true)]
    pub(crate) content_policy: Option<ContentPolicy>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// What kind of raw input to map. `INPUT` is a file path, or `-` for stdin.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// A single status record (`value`, `modifiedby`, `timestamp`)
    Status { input: PathBuf },
    /// A single temperature record (`value`, `timestamp`, `sensor`)
    Temperature { input: PathBuf },
    /// A single message record (`value`, `user`, `timestamp`)
    Message { input: PathBuf },
    /// A JSON array of temperature records; output order is reversed
    Batch { input: PathBuf },
    /// A wrapped broadcast record (`{"status" | "tempint" | "msg": {...}}`)
    Envelope { input: PathBuf },
    /// A latest-data document (`status`, `tempint`, `tempinthist`, `version`, `msg`)
    Snapshot { input: PathBuf },
}
