//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use play::{PlayCommand, run_play};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use suggest::{parse_attempt, suggest};
