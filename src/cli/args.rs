// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Classify Options:
    --source, -s <SOURCE>      JSON-lines frame file recorded from a pose oracle
    --hand-conf <CONF>         Hand joint confidence threshold [default: 0.5]
    --body-conf <CONF>         Body joint confidence threshold [default: 0.3]
    --max-hands <N>            Maximum hands evaluated per frame [default: 2]
    --verbose                  Show per-frame output

Examples:
    gesture-inference classify --source frames.jsonl
    gesture-inference classify --source frames.jsonl --hand-conf 0.6
    gesture-inference classify -s frames.jsonl --max-hands 1 --verbose false"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify gestures in a recorded frame stream
    Classify(ClassifyArgs),
}

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON-lines frame file recorded from a pose oracle
    #[arg(short, long)]
    pub source: String,

    /// Hand joint confidence threshold
    #[arg(long, default_value_t = 0.5)]
    pub hand_conf: f32,

    /// Body joint confidence threshold
    #[arg(long, default_value_t = 0.3)]
    pub body_conf: f32,

    /// Maximum hands evaluated per frame
    #[arg(long, default_value_t = 2)]
    pub max_hands: usize,

    /// Show per-frame output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classify_args_defaults() {
        let args = Cli::parse_from(["app", "classify", "--source", "frames.jsonl"]);
        match args.command {
            Commands::Classify(classify_args) => {
                assert_eq!(classify_args.source, "frames.jsonl");
                assert!((classify_args.hand_conf - 0.5).abs() < f32::EPSILON);
                assert!((classify_args.body_conf - 0.3).abs() < f32::EPSILON);
                assert_eq!(classify_args.max_hands, 2);
                assert!(classify_args.verbose);
            }
        }
    }

    #[test]
    fn test_classify_args_custom() {
        let args = Cli::parse_from([
            "app",
            "classify",
            "--source",
            "session.jsonl",
            "--hand-conf",
            "0.6",
            "--max-hands",
            "1",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Classify(classify_args) => {
                assert_eq!(classify_args.source, "session.jsonl");
                assert!((classify_args.hand_conf - 0.6).abs() < f32::EPSILON);
                assert_eq!(classify_args.max_hands, 1);
                assert!(!classify_args.verbose);
            }
        }
    }
}
