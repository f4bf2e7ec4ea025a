//! entrodle - CLI
//!
//! Information-theoretic solver for 5-letter word-guessing puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use entrodle::{
    commands::{analyze_word, run_assist, run_solve, run_test_all},
    core::Word,
    output::{print_analysis, print_evaluation, print_solve_report},
    solver::{DEFAULT_MAX_ATTEMPTS, Solver},
    wordlist::WordList,
};

#[derive(Parser)]
#[command(
    name = "entrodle",
    about = "Picks guesses that maximize expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fixed opening guess for attempt 0, or 'none' to score the full list
    #[arg(short = 'f', long, global = true, default_value = "raise")]
    first_word: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): suggests guesses, you report feedback
    Assist,

    /// Solve a specific target word and print the attempt trace
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per attempt
        #[arg(short, long)]
        verbose: bool,

        /// Attempt budget
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Analyze the pattern distribution and entropy of a word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of distribution rows to print
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Evaluate the solver against every word in the list
    TestAll {
        /// Limit the number of words tested
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn load_wordlist(mode: &str) -> Result<WordList> {
    match mode {
        "embedded" => Ok(WordList::from_embedded()),
        path => WordList::from_file(path).with_context(|| format!("failed to load wordlist {path}")),
    }
}

fn parse_opening(first_word: &str, list: &WordList) -> Result<Option<Word>> {
    if first_word.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let word = Word::new(first_word).context("invalid first word")?;
    anyhow::ensure!(
        list.find(word.text()).is_some(),
        "first word '{first_word}' is not in the word list"
    );
    Ok(Some(word))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let list = load_wordlist(&cli.wordlist)?;
    let opening = parse_opening(&cli.first_word, &list)?;

    let mut solver = Solver::new(list.words());
    if let Some(opening) = opening {
        solver = solver.with_opening(opening);
    }

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => run_assist(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve {
            word,
            verbose,
            max_attempts,
        } => {
            let report = run_solve(&solver, &word, max_attempts)?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let report = analyze_word(&word, &list)?;
            print_analysis(&report, top);
            Ok(())
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(&solver, limit);
            print_evaluation(&stats);
            Ok(())
        }
    }
}
