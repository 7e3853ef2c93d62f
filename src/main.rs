// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use gesture_inference::cli::args::{Cli, Commands};
use gesture_inference::cli::classify::run_classification;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => run_classification(&args),
    }
}
