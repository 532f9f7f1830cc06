//! Interactive assistant loop
//!
//! Suggests guesses, reads back what was played and the feedback the game
//! gave, and narrows the viable set round by round.

use super::suggest::parse_attempt;
use crate::output::{print_history, print_selection, print_solved};
use crate::solver::{ScoreCalculator, Session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// A played word and its feedback
    Attempt { word: String, feedback: String },
    Undo,
    New,
    /// Switch between hardcore and exploration scoring
    ToggleMode,
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse a line of input
    ///
    /// Attempts are `word feedback` or `word=feedback`.
    ///
    /// # Errors
    ///
    /// Returns a message for anything that is not a command or an attempt.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            "new" | "n" => return Ok(Self::New),
            "undo" | "u" => return Ok(Self::Undo),
            "mode" | "m" => return Ok(Self::ToggleMode),
            "help" | "h" | "?" => return Ok(Self::Help),
            _ => {}
        }

        let (word, feedback) = match line.split_once(char::is_whitespace) {
            Some((word, feedback)) => (word.to_string(), feedback.trim().to_string()),
            None => parse_attempt(&line)?,
        };
        Ok(Self::Attempt { word, feedback })
    }
}

fn print_help() {
    println!("Enter the word you played and the feedback it got, e.g. 'crane gywww'");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use W/-/_/⬜ for gray (not in word)");
    println!("Commands: 'undo', 'new', 'mode' (hardcore/exploration), 'quit'\n");
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails.
pub fn run_play<S: ScoreCalculator, R: BufRead>(
    session: &mut Session<S>,
    mut input: R,
    num_best: usize,
    num_worst: usize,
) -> io::Result<()> {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!("{}", "  Wordle Buddy - Interactive Mode".bright_cyan().bold());
    println!("{}\n", "═".repeat(62).bright_cyan());
    print_help();

    let mut show_suggestions = true;
    loop {
        if show_suggestions {
            println!("{}", "─".repeat(62));
            println!(
                "Attempt {}: {} candidates remaining ({:?} mode)",
                session.attempt_num(),
                session.remaining(),
                session.mode()
            );
            println!("{}", "─".repeat(62));

            let selection = session.suggest(num_best, num_worst);
            print_selection(&selection);
        }
        show_suggestions = true;

        let Some(line) = prompt(&mut input, "Guess and feedback")? else {
            println!();
            return Ok(());
        };
        if line.is_empty() {
            show_suggestions = false;
            continue;
        }

        match PlayCommand::parse(&line) {
            Ok(PlayCommand::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Ok(PlayCommand::New) => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            Ok(PlayCommand::Undo) => match session.undo() {
                Some(attempt) => println!("✓ Undid {}\n", attempt.guess.text().to_uppercase()),
                None => {
                    println!("Nothing to undo!\n");
                    show_suggestions = false;
                }
            },
            Ok(PlayCommand::ToggleMode) => {
                session.set_mode(session.mode().toggled());
                println!("Switched to {:?} mode\n", session.mode());
            }
            Ok(PlayCommand::Help) => {
                print_help();
                show_suggestions = false;
            }
            Ok(PlayCommand::Attempt { word, feedback }) => {
                match session.process_guess(&word, &feedback) {
                    Ok(0) => {
                        println!("\n❌ No candidates remain! Your feedback may be incorrect.");
                        println!("Type 'undo' to go back, or 'new' to start over.\n");
                    }
                    Ok(_) if session.is_solved() => {
                        print_solved(session.history());
                        session.reset();
                        println!("🔄 New game started!\n");
                    }
                    Ok(_) => print_history(session.history()),
                    Err(e) => {
                        println!("❌ {e}\n");
                        show_suggestions = false;
                    }
                }
            }
            Err(e) => {
                println!("❌ {e}\n");
                show_suggestions = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Hyperparameters, Word};
    use crate::solver::{EntropyScorer, ScoringMode};
    use std::io::Cursor;
    use std::sync::Arc;

    fn session() -> Session<EntropyScorer> {
        let words = ["crane", "slate", "irate", "crate", "grate", "trace", "fuzzy", "mound"];
        let dictionary = Dictionary::new("test", words.iter().map(|w| Word::new(w).unwrap()));
        Session::new(
            Arc::new(dictionary),
            EntropyScorer::new(Hyperparameters::default()),
            ScoringMode::Hardcore,
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(PlayCommand::parse("Q"), Ok(PlayCommand::Quit));
        assert_eq!(PlayCommand::parse(" undo "), Ok(PlayCommand::Undo));
        assert_eq!(PlayCommand::parse("mode"), Ok(PlayCommand::ToggleMode));
        assert_eq!(PlayCommand::parse("new"), Ok(PlayCommand::New));
    }

    #[test]
    fn parses_attempts() {
        let expected = PlayCommand::Attempt {
            word: "crane".to_string(),
            feedback: "gywww".to_string(),
        };
        assert_eq!(PlayCommand::parse("CRANE GYWWW"), Ok(expected.clone()));
        assert_eq!(PlayCommand::parse("crane=gywww"), Ok(expected));
        assert!(PlayCommand::parse("crane").is_err());
    }

    #[test]
    fn loop_applies_attempts_until_quit() {
        let mut game = session();
        let input = Cursor::new("slate wwggg\nbogus\nmode\nquit\n");

        run_play(&mut game, input, 3, 1).unwrap();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.remaining(), 3);
        assert_eq!(game.mode(), ScoringMode::Exploration);
    }

    #[test]
    fn loop_handles_undo_and_end_of_input() {
        let mut game = session();
        let input = Cursor::new("slate wwggg\nundo\nundo\n");

        run_play(&mut game, input, 3, 1).unwrap();

        assert!(game.history().is_empty());
        assert_eq!(game.remaining(), 8);
    }

    #[test]
    fn solved_game_starts_over() {
        let mut game = session();
        let input = Cursor::new("crane ggggg\n");

        run_play(&mut game, input, 3, 1).unwrap();
        assert!(game.history().is_empty());
    }
}
