use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shape construction and compass telemetry over a line-delimited JSON channel.
#[derive(Parser, Debug)]
#[command(name = "arkit-bridge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Accept degenerate shape dimensions instead of rejecting them.
    #[arg(long)]
    pub permissive: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Answer channel requests read from stdin, one JSON object per line.
    Serve,
    /// Replay heading samples from stdin and print the resulting events.
    Heading {
        /// Behave like a device without a compass.
        #[arg(long)]
        no_compass: bool,
    },
    /// List the supported shape kinds.
    Kinds,
}

pub fn parse() -> Args {
    Args::parse()
}
