mod args;
mod handlers;
mod output;

pub use args::{Cli, Commands, OutputFormat};

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            paths,
            mode,
            test_case,
        } => handlers::analyze::run(paths, mode, test_case, cli.format),
        Commands::Inspect { file, mode } => handlers::inspect::run(&file, mode),
    }
}
