//! chalkline CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chalkline", version, about = "Course grading pipeline utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a test-runner JSON report into the grading platform schema
    Format {
        /// Raw report JSON, overwritten in place with the formatted result
        report: PathBuf,

        /// Newline-delimited list of test suites visible before grades are
        /// published; when given, every suite gets a visibility flag
        visible_tests: Option<PathBuf>,
    },

    /// Play the word-guessing game
    Play {
        /// Word pool to draw from (FIXED or ARBITRARY); prompted when absent
        #[arg(long)]
        mode: Option<String>,

        /// Fixed-length word list file (overrides the built-in list)
        #[arg(long, requires = "arbitrary_words")]
        fixed_words: Option<PathBuf>,

        /// Arbitrary-length word list file (overrides the built-in list)
        #[arg(long, requires = "fixed_words")]
        arbitrary_words: Option<PathBuf>,

        /// Guess-range table TOML (overrides the built-in table)
        #[arg(long)]
        ranges: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chalkline=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            report,
            visible_tests,
        } => commands::format::execute(report, visible_tests),
        Commands::Play {
            mode,
            fixed_words,
            arbitrary_words,
            ranges,
        } => commands::play::execute(mode, fixed_words, arbitrary_words, ranges),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
