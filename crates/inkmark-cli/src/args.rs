use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use inkmark_types::Mode;

#[derive(Parser)]
#[command(name = "inkmark")]
#[command(about = "Extract display refresh timings from e-reader device logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result tables plus a run summary
    Plain,
    /// Full report document as JSON
    Json,
    /// One CSV row per iteration result
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze captures and report per-iteration durations")]
    Analyze {
        /// Capture files or directories (walked for *.log and *.txt);
        /// reads stdin when empty
        paths: Vec<PathBuf>,

        #[arg(
            long,
            default_value = "default",
            help = "Start-event family: default, swipe, or suspend"
        )]
        mode: Mode,

        #[arg(long, help = "Label stamped into the report header")]
        test_case: Option<String>,
    },

    #[command(about = "Show per-line extraction decisions for one capture")]
    Inspect {
        file: PathBuf,

        #[arg(
            long,
            default_value = "default",
            help = "Start-event family: default, swipe, or suspend"
        )]
        mode: Mode,
    },
}
