use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vendor-growth")]
#[command(about = "Marketing recommendations for small vendors")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Growth plan for one vendor profile
    Plan {
        #[arg(long)]
        profile: PathBuf,
    },
    /// Content recommendation for one vendor profile
    Content {
        #[arg(long)]
        profile: PathBuf,
    },
    /// Compatibility score between two vendor profiles
    Match {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        other: PathBuf,
    },
    /// Expansion eligibility verdict
    Expansion {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long, default_value = "0")]
        collaborations: u32,
    },
    /// Resource score, strategy and platform ranking for a listing
    Dashboard {
        #[arg(long)]
        listing: PathBuf,
    },
    /// Best collaboration partners for a listing
    Matches {
        #[arg(long)]
        listing: PathBuf,
        #[arg(long)]
        candidates: PathBuf,
    },
}
