//! Shiftbreak: Caesar cipher breaker
//!
//! Brute force over all 25 shifts → TextScorer (5 heuristics) → ranking → confidence tier

pub mod core;
pub mod error;
pub mod types;

pub use error::{AnalyzerError, AnalyzerResult};

// =============================================================================
// KEY SPACE
// =============================================================================

/// Letters in the alphabet (shift arithmetic is modulo this)
pub const ALPHABET_SIZE: u8 = 26;

/// Keys tried by the ranker: 1..=25 (0 is the identity transform)
pub const MIN_KEY: u8 = 1;
pub const MAX_KEY: u8 = 25;

// =============================================================================
// HEURISTIC CALIBRATION [C] - empirical English targets
// =============================================================================

/// Typical share of stopwords in English prose (percent)
pub const STOPWORD_OPTIMAL_PERCENT: f64 = 25.0;
/// Penalty per percentage point away from the stopword optimum
pub const STOPWORD_PENALTY: f64 = 3.0;

/// Chi-square at or below this is a perfect frequency match
pub const CHI_SQUARE_PERFECT: f64 = 150.0;
/// Chi-square at or above this scores zero
pub const CHI_SQUARE_WORST: f64 = 1000.0;
/// Slope of the linear chi-square → score mapping
pub const CHI_SQUARE_SLOPE: f64 = 8.5;

/// Share of common bigrams among all letter pairs (percent)
pub const BIGRAM_OPTIMAL_PERCENT: f64 = 12.5;
/// Penalty per percentage point away from the bigram optimum
pub const BIGRAM_PENALTY: f64 = 6.0;

/// Average Shannon entropy of English letters (bits/letter)
pub const ENTROPY_OPTIMAL_BITS: f64 = 4.07;
/// Fewer letters than this → neutral entropy score
pub const ENTROPY_MIN_LETTERS: usize = 10;
/// Score returned for samples too short to estimate entropy
pub const ENTROPY_NEUTRAL_SCORE: f64 = 50.0;
/// Differences below this score 100
pub const ENTROPY_TOLERANCE_BITS: f64 = 0.5;
/// Differences above this score 0
pub const ENTROPY_MAX_DIFF_BITS: f64 = 2.0;

// =============================================================================
// DEFAULT WEIGHTS [C] - stopwords dominate on short texts (sum = 1.0)
// =============================================================================

pub const WEIGHT_STOPWORDS: f64 = 0.30;
pub const WEIGHT_DICTIONARY: f64 = 0.25;
pub const WEIGHT_FREQUENCY: f64 = 0.20;
pub const WEIGHT_BIGRAMS: f64 = 0.15;
pub const WEIGHT_ENTROPY: f64 = 0.10; // Noisiest signal

// =============================================================================
// CONFIDENCE TIERS (lower bound inclusive)
// =============================================================================

pub const TIER_VERY_HIGH: f64 = 80.0;
pub const TIER_HIGH: f64 = 60.0;
pub const TIER_MEDIUM: f64 = 40.0;
pub const TIER_LOW: f64 = 20.0;

// =============================================================================
// REPORTING
// =============================================================================

/// Default number of ranked solutions returned
pub const DEFAULT_TOP_N: usize = 5;

/// Characters kept in a candidate preview
pub const PREVIEW_CHARS: usize = 120;

/// Preview lengths in a method comparison
pub const COMPARISON_PREVIEW_CHARS: usize = 50;
pub const CIPHERTEXT_PREVIEW_CHARS: usize = 100;

/// Reference corpus file names inside the data directory
pub const STOPWORDS_FILE: &str = "stopwords_en.txt";
pub const DICTIONARY_FILE: &str = "words_en.txt";

/// Default data directory for the reference corpus
pub const DEFAULT_DATA_DIR: &str = "data";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
