//! Wordle Buddy - CLI
//!
//! Interactive Wordle assistant ranking guesses by letter-channel entropy.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_buddy::{
    commands::{
        analyze_word, parse_attempt, run_benchmark, run_play, sample_secrets, solve_word, suggest,
    },
    config::{DEFAULT_NUM_BEST, DEFAULT_NUM_WORST, Settings},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_selection, print_solve_result},
    solver::{ScoringMode, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "wordle_buddy",
    about = "Wordle assistant ranking guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank language
    #[arg(short, long, global = true, default_value = "english")]
    language: String,

    /// Directory holding <language>.txt word banks
    #[arg(short, long, global = true, env = "WORDLE_BUDDY_DICT_DIR")]
    dict_dir: Option<PathBuf>,

    /// Scoring strategy
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::Entropy)]
    strategy: StrategyKind,

    /// Score every word in the bank, not only possible answers
    #[arg(short, long, global = true)]
    exploration: bool,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Base weight for words that can still be the answer
    #[arg(long, global = true, default_value_t = 1.0)]
    answer_weight: f64,

    /// Viable-set size at or below which only possible answers are suggested
    #[arg(long, global = true, default_value_t = 2)]
    endgame_threshold: usize,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play {
        /// Number of best guesses to show
        #[arg(short = 'b', long, default_value_t = DEFAULT_NUM_BEST)]
        best: usize,

        /// Number of worst guesses to show
        #[arg(short = 'w', long, default_value_t = DEFAULT_NUM_WORST)]
        worst: usize,
    },

    /// Rank the next guess after the given attempts
    Suggest {
        /// Attempts so far as WORD=FEEDBACK, e.g. crane=gywww
        #[arg(value_parser = parse_attempt)]
        attempts: Vec<(String, String)>,

        /// Number of best guesses to show
        #[arg(short = 'b', long, default_value_t = DEFAULT_NUM_BEST)]
        best: usize,

        /// Number of worst guesses to show
        #[arg(short = 'w', long, default_value_t = DEFAULT_NUM_WORST)]
        worst: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Override the first guess
        #[arg(short, long)]
        first_word: Option<String>,

        /// Show candidate counts per turn
        #[arg(long)]
        details: bool,
    },

    /// Explain the score of a word
    Analyze {
        /// Word to analyze
        word: String,

        /// Attempts so far as WORD=FEEDBACK
        #[arg(long = "after", value_parser = parse_attempt)]
        attempts: Vec<(String, String)>,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Override the first guess
        #[arg(short, long)]
        first_word: Option<String>,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            language: self.language.clone(),
            dict_dir: self.dict_dir.clone(),
            strategy: self.strategy,
            mode: if self.exploration {
                ScoringMode::Exploration
            } else {
                ScoringMode::Hardcore
            },
            max_guesses: self.max_guesses,
            answer_weight: self.answer_weight,
            endgame_threshold: self.endgame_threshold,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("invalid word '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings();
    let hparams = settings
        .hyperparameters()
        .context("invalid scoring configuration")?;
    let dictionary = settings
        .load_dictionary()
        .with_context(|| format!("failed to load the '{}' word bank", settings.language))?;
    let mut session = settings.session(dictionary.clone())?;

    let command = cli.command.unwrap_or(Commands::Play {
        best: DEFAULT_NUM_BEST,
        worst: DEFAULT_NUM_WORST,
    });

    match command {
        Commands::Play { best, worst } => {
            run_play(&mut session, io::stdin().lock(), best, worst)?;
        }
        Commands::Suggest {
            attempts,
            best,
            worst,
        } => {
            let selection = suggest(&mut session, &attempts, best, worst)?;
            print_selection(&selection);
        }
        Commands::Solve {
            word,
            first_word,
            details,
        } => {
            let forced = first_word.as_deref().map(parse_word).transpose()?;
            let result = solve_word(&mut session, &word, settings.max_guesses, forced.as_ref())?;
            print_solve_result(&result, details);
        }
        Commands::Analyze { word, attempts } => {
            session.process_guesses(&attempts)?;
            let viable: Vec<&Word> = session.viable().collect();
            let result = analyze_word(
                &word,
                &dictionary,
                &viable,
                session.attempt_num(),
                &hparams,
            )?;
            print_analysis_result(&result);
        }
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => {
            let forced = first_word.as_deref().map(parse_word).transpose()?;
            let secrets = sample_secrets(&dictionary, count, seed);
            println!("Running benchmark on {} random words...", secrets.len());
            let result = run_benchmark(&settings, &dictionary, &secrets, forced.as_ref(), true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
