use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipforge")]
#[command(author, version, about = "Split long media files into bounded-duration segments")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a media file into segments of bounded duration
    Split {
        /// Input media file
        #[arg(required = true)]
        input: PathBuf,

        /// Maximum segment length, e.g. 30m, 2h, 1800, or 01:00:00
        #[arg(short, long)]
        max: String,

        /// Output root directory (default: sibling <name>_split directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Overwrite existing segment outputs
        #[arg(long)]
        overwrite: bool,

        /// Plan and report without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe a media file and display its duration
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
