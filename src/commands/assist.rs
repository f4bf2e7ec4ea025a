//! Interactive assistant
//!
//! Text-based helper for playing along with a real puzzle: suggests a
//! guess, reads the observed feedback from stdin, narrows, and repeats.
//! All prompting I/O lives here; the solving core stays pure.

use crate::core::{FeedbackPattern, Word};
use crate::output::{colored_guess, pattern_glyphs};
use crate::solver::{SolveError, Solver, expected_entropy};
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
/// Returns an error on I/O failure or when no valid guess can be made.
pub fn run_assist(solver: &Solver<'_>) -> Result<(), String> {
    println!("\nI'll suggest guesses that maximize expected information gain.");
    println!("After each guess, enter the feedback you observed:\n");
    println!("  - G/g/🟩 for a letter in the correct position");
    println!("  - Y/y/🟨 for a letter present elsewhere");
    println!("  - -/_/⬜ for an absent letter");
    println!("  - 'win' if the guess was the answer\n");
    println!("Commands: 'quit' to exit, 'new' to restart, 'undo' to take back a guess\n");

    let mut history: Vec<(Word, FeedbackPattern)> = Vec::new();

    loop {
        let candidates = solver.candidates(&history);

        if candidates.is_empty() {
            println!("\nNo candidates remain; some feedback must be wrong.");
            println!("Type 'undo' to go back or 'new' to start over.\n");

            match get_input("Command")?.as_str() {
                "undo" | "u" => {
                    history.pop();
                }
                "new" | "n" => history.clear(),
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let guess = solver
            .next_guess(history.len(), &history)
            .map_err(|e| e.to_string())?
            .clone();

        println!("────────────────────────────────────────");
        println!(
            "Attempt {}: {} candidates remaining",
            history.len() + 1,
            candidates.len()
        );

        match expected_entropy(&guess, &candidates) {
            Ok(entropy) => println!(
                "\nSuggested guess: {}  ({entropy:.3} bits expected)",
                guess.text().to_uppercase()
            ),
            Err(SolveError::EmptyCandidateSet) => unreachable!("candidates verified non-empty"),
            Err(e) => return Err(e.to_string()),
        }

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        loop {
            let input = get_input("Feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nGoodbye!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\nNew game started.\n");
                    break;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("Undone.\n");
                        break;
                    }
                    println!("Nothing to undo.\n");
                }
                "win" | "correct" | "solved" => {
                    let perfect = FeedbackPattern::compute(&guess, &guess);
                    println!(
                        "\nSolved in {} attempts! {}\n",
                        history.len() + 1,
                        colored_guess(&perfect)
                    );
                    return Ok(());
                }
                _ => match FeedbackPattern::from_glyphs(&guess, &input) {
                    Some(pattern) => {
                        if pattern.is_solved() {
                            println!(
                                "\nSolved in {} attempts! {}\n",
                                history.len() + 1,
                                colored_guess(&pattern)
                            );
                            return Ok(());
                        }
                        println!("Recorded: {}\n", pattern_glyphs(&pattern));
                        history.push((guess.clone(), pattern));
                        break;
                    }
                    None => {
                        println!("Could not parse that pattern; use five of G, Y, or -.\n");
                    }
                },
            }
        }
    }
}

fn get_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
