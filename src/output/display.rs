//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, entropy_bar, feedback_to_emoji, score_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{Attempt, ScoredWord, Selection};
use colored::Colorize;

fn print_ranked(title: &str, ranked: &[ScoredWord<'_>], best: f64) {
    println!("\n{title}");
    for (i, scored) in ranked.iter().enumerate() {
        println!(
            "  {:>2}. {} [{}] {:.3}",
            i + 1,
            scored.word.text().to_uppercase().bright_white().bold(),
            score_bar(scored.score, best, 20).green(),
            scored.score
        );
    }
}

/// Print the ranked suggestions for the next guess
pub fn print_selection(selection: &Selection<'_>) {
    match selection {
        Selection::NoViableGuesses => {
            println!(
                "\n{}",
                "No word fits the feedback so far. Check the last entry or 'undo'."
                    .red()
                    .bold()
            );
        }
        Selection::Ranked { best, worst } => {
            let top = best.first().map_or(0.0, |s| s.score);
            print_ranked(&format!("📊 {}", "Best guesses".bright_cyan().bold()), best, top);
            if !worst.is_empty() {
                print_ranked(&format!("🔻 {}", "Worst guesses".yellow()), worst, top);
            }
            println!();
        }
    }
}

/// Print the guesses played so far as colored tiles
pub fn print_history(history: &[Attempt]) {
    for (i, attempt) in history.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            colored_tiles(&attempt.guess, &attempt.feedback)
        );
    }
    println!();
}

/// Celebrate a finished game
pub fn print_solved(history: &[Attempt]) {
    let turns = history.len();
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!("{}", "    🎉  W O R D L E   S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  Solution found in {} {}\n",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    for (i, attempt) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            attempt.guess.text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(&attempt.feedback)
        );
    }
    println!("\n{}\n", "═".repeat(62).bright_cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.score.is_finite() {
                println!("  Score:      {:.3}", step.score);
            }
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let breakdown = &result.breakdown;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Attempt {} against {} possible answers:\n",
        result.attempt_num, result.total_candidates
    );
    println!("   pos letter  green  yellow  white   weight  contribution");
    for (position, term) in breakdown.terms.iter().enumerate() {
        println!(
            "   {:>3} {:>6}  {:.3}  {:.3}   {:.3}   {:.2}    {:.3}",
            position + 1,
            term.letter.to_ascii_uppercase(),
            term.green,
            term.yellow * term.yellow_factor,
            term.white * term.white_factor,
            term.weight,
            term.contribution
        );
    }

    println!("\n   Raw score:    {:.3}", breakdown.raw);
    println!(
        "   Multiplier:   {:.3} ({})",
        breakdown.multiplier,
        if breakdown.is_candidate {
            "possible answer".green()
        } else {
            "not a possible answer".yellow()
        }
    );
    println!(
        "   Total:        {}",
        format!("{:.3}", breakdown.total).bright_yellow().bold()
    );

    println!(
        "\n   Partition:    [{}] {}",
        entropy_bar(result.partition_entropy, 30).green(),
        format!("{:.3} bits", result.partition_entropy).bright_yellow()
    );
    println!(
        "   Expected:     {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved.to_string().green());
    if !result.failed_words.is_empty() {
        println!(
            "   Failed:           {} ({})",
            result.failed_words.len().to_string().red(),
            result.failed_words.join(", ")
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
