//! Text Scorer: measures "Englishness" via 5 linguistic heuristics
//!
//! Every score is 0-100. The combined score is a weighted mean normalized
//! by the total weight of the recognized heuristics.

use std::collections::{HashMap, HashSet};
use lazy_static::lazy_static;
use crate::{
    STOPWORD_OPTIMAL_PERCENT, STOPWORD_PENALTY,
    CHI_SQUARE_PERFECT, CHI_SQUARE_WORST, CHI_SQUARE_SLOPE,
    BIGRAM_OPTIMAL_PERCENT, BIGRAM_PENALTY,
    ENTROPY_OPTIMAL_BITS, ENTROPY_MIN_LETTERS, ENTROPY_NEUTRAL_SCORE,
    ENTROPY_TOLERANCE_BITS, ENTROPY_MAX_DIFF_BITS,
};
use crate::core::ReferenceCorpus;
use crate::types::{Heuristic, ScoreBreakdown, ScoringWeights};

/// Expected English letter frequencies (percent)
pub const ENGLISH_FREQUENCIES: [(char, f64); 26] = [
    ('e', 12.02), ('t', 9.10), ('a', 8.12), ('o', 7.68), ('i', 7.31),
    ('n', 6.95), ('s', 6.28), ('r', 6.02), ('h', 5.92), ('d', 4.32),
    ('l', 3.98), ('u', 2.88), ('c', 2.71), ('m', 2.61), ('f', 2.30),
    ('y', 2.11), ('w', 2.09), ('g', 2.03), ('p', 1.82), ('b', 1.49),
    ('v', 1.11), ('k', 0.69), ('x', 0.17), ('q', 0.11), ('j', 0.10),
    ('z', 0.07),
];

/// Most common English letter pairs
pub const COMMON_BIGRAMS: [&str; 39] = [
    "th", "he", "in", "er", "an", "re", "nd", "at", "on", "nt",
    "ha", "es", "st", "en", "ed", "to", "it", "ou", "ea", "hi",
    "is", "or", "ti", "as", "te", "et", "ng", "of", "al", "de",
    "se", "le", "sa", "si", "ar", "ve", "ra", "ld", "ur",
];

lazy_static! {
    static ref BIGRAM_SET: HashSet<(char, char)> = COMMON_BIGRAMS
        .iter()
        .filter_map(|b| {
            let mut chars = b.chars();
            Some((chars.next()?, chars.next()?))
        })
        .collect();
}

/// Scores candidate plaintexts against a reference corpus
#[derive(Debug, Clone, Default)]
pub struct TextScorer {
    corpus: ReferenceCorpus,
}

impl TextScorer {
    /// Create scorer over a loaded corpus
    pub fn new(corpus: ReferenceCorpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    /// Dispatch to the scoring function for one heuristic
    pub fn score_heuristic(&self, heuristic: Heuristic, text: &str) -> f64 {
        match heuristic {
            Heuristic::Stopwords => self.score_stopwords(text),
            Heuristic::Dictionary => self.score_dictionary(text),
            Heuristic::Frequency => self.score_frequency(text),
            Heuristic::Bigrams => self.score_bigrams(text),
            Heuristic::Entropy => self.score_entropy(text),
        }
    }

    /// Stopword density compared with the 25% English optimum
    pub fn score_stopwords(&self, text: &str) -> f64 {
        let words = extract_words(text);
        if words.is_empty() {
            return 0.0;
        }

        let hits = words.iter().filter(|w| self.corpus.is_stopword(w)).count();
        let percentage = hits as f64 / words.len() as f64 * 100.0;

        let score = 100.0
            - ((percentage - STOPWORD_OPTIMAL_PERCENT).abs() * STOPWORD_PENALTY).min(100.0);
        score.clamp(0.0, 100.0)
    }

    /// Share of dictionary words, as a percentage
    pub fn score_dictionary(&self, text: &str) -> f64 {
        let words = extract_words(text);
        if words.is_empty() {
            return 0.0;
        }

        let hits = words.iter().filter(|w| self.corpus.is_dictionary_word(w)).count();
        (hits as f64 / words.len() as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Chi-square fit of letter frequencies against English
    pub fn score_frequency(&self, text: &str) -> f64 {
        let chi_square = match chi_square(text) {
            Some(x) => x,
            None => return 0.0,
        };

        let score = if chi_square <= CHI_SQUARE_PERFECT {
            100.0
        } else if chi_square >= CHI_SQUARE_WORST {
            0.0
        } else {
            100.0 - (chi_square - CHI_SQUARE_PERFECT) / CHI_SQUARE_SLOPE
        };
        score.clamp(0.0, 100.0)
    }

    /// Common-bigram density compared with the 12.5% optimum
    pub fn score_bigrams(&self, text: &str) -> f64 {
        let letters: Vec<char> = folded_letters(text).collect();
        if letters.len() < 2 {
            return 0.0;
        }

        let windows = letters.len() - 1;
        let hits = letters
            .windows(2)
            .filter(|w| BIGRAM_SET.contains(&(w[0], w[1])))
            .count();
        let percentage = hits as f64 / windows as f64 * 100.0;

        let score = 100.0
            - ((percentage - BIGRAM_OPTIMAL_PERCENT).abs() * BIGRAM_PENALTY).min(100.0);
        score.clamp(0.0, 100.0)
    }

    /// Shannon entropy compared with 4.07 bits/letter
    ///
    /// Samples under 10 letters get a neutral 50 so short ciphertexts are
    /// neither rewarded nor penalized.
    pub fn score_entropy(&self, text: &str) -> f64 {
        let entropy = match shannon_entropy(text) {
            Some(h) => h,
            None => return ENTROPY_NEUTRAL_SCORE,
        };

        let diff = (entropy - ENTROPY_OPTIMAL_BITS).abs();
        let score = if diff < ENTROPY_TOLERANCE_BITS {
            100.0
        } else if diff > ENTROPY_MAX_DIFF_BITS {
            0.0
        } else {
            100.0 - diff * 50.0
        };
        score.clamp(0.0, 100.0)
    }

    /// Weighted mean of all five scores (default weights when None)
    ///
    /// Zero total weight yields 0.
    pub fn combined_score(&self, text: &str, weights: Option<&ScoringWeights>) -> f64 {
        let default_weights;
        let weights = match weights {
            Some(w) => w,
            None => {
                default_weights = ScoringWeights::default();
                &default_weights
            }
        };

        let total_weight = weights.total();
        if total_weight <= 0.0 {
            return 0.0;
        }

        // Share of each weight first: a total that overflows to inf gives 0, never NaN
        let composite: f64 = Heuristic::ALL
            .iter()
            .map(|h| (h, weights.get(*h) / total_weight))
            .filter(|(_, share)| *share > 0.0)
            .map(|(h, share)| self.score_heuristic(*h, text) * share)
            .sum();

        composite.clamp(0.0, 100.0)
    }

    /// All five scores plus the default-weighted composite
    pub fn analyze(&self, text: &str) -> ScoreBreakdown {
        self.analyze_weighted(text, None)
    }

    /// All five scores plus the composite under `weights`
    pub fn analyze_weighted(&self, text: &str, weights: Option<&ScoringWeights>) -> ScoreBreakdown {
        ScoreBreakdown {
            stopwords: self.score_stopwords(text),
            dictionary: self.score_dictionary(text),
            frequency: self.score_frequency(text),
            bigrams: self.score_bigrams(text),
            entropy: self.score_entropy(text),
            combined: self.combined_score(text, weights),
        }
    }
}

/// Split text into lowercase words of consecutive alphabetic characters
///
/// Digits and punctuation only separate words; they never belong to one.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Alphabetic characters of `text`, case-folded
pub fn folded_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| c.is_alphabetic()).flat_map(char::to_lowercase)
}

/// Chi-square statistic vs. English; None when there are no letters
pub fn chi_square(text: &str) -> Option<f64> {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return None;
    }

    let mut chi = 0.0;
    for (letter, percent) in ENGLISH_FREQUENCIES {
        let expected = total as f64 * percent / 100.0;
        if expected > 0.0 {
            let observed = counts.get(&letter).copied().unwrap_or(0) as f64;
            let diff = observed - expected;
            chi += diff * diff / expected;
        }
    }
    Some(chi)
}

/// Shannon entropy in bits/letter; None below the minimum sample size
pub fn shannon_entropy(text: &str) -> Option<f64> {
    let (counts, total) = letter_counts(text);
    if total < ENTROPY_MIN_LETTERS {
        return None;
    }

    let n = total as f64;
    Some(
        counts
            .values()
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum(),
    )
}

/// Case-folded letter counts and their total
fn letter_counts(text: &str) -> (HashMap<char, usize>, usize) {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in folded_letters(text) {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    (counts, total)
}

// =============================================================================
// TESTS
// =============================================================================
