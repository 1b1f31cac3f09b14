//! The five scoring heuristics as a fixed enumeration

use serde::{Deserialize, Serialize};
use crate::{
    WEIGHT_STOPWORDS, WEIGHT_DICTIONARY, WEIGHT_FREQUENCY,
    WEIGHT_BIGRAMS, WEIGHT_ENTROPY,
};

/// One linguistic dimension of "Englishness"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Share of stopwords vs. the 25% English optimum
    Stopwords,
    /// Share of words found in the dictionary
    Dictionary,
    /// Chi-square fit against English letter frequencies
    Frequency,
    /// Share of common bigrams vs. the 12.5% optimum
    Bigrams,
    /// Shannon entropy vs. 4.07 bits/letter
    Entropy,
}

impl Heuristic {
    /// All heuristics in weight order
    pub const ALL: [Heuristic; 5] = [
        Heuristic::Stopwords,
        Heuristic::Dictionary,
        Heuristic::Frequency,
        Heuristic::Bigrams,
        Heuristic::Entropy,
    ];

    /// Key used in weight maps and JSON
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Stopwords => "stopwords",
            Heuristic::Dictionary => "dictionary",
            Heuristic::Frequency => "frequency",
            Heuristic::Bigrams => "bigrams",
            Heuristic::Entropy => "entropy",
        }
    }

    /// Default weight in the combined score
    pub fn default_weight(&self) -> f64 {
        match self {
            Heuristic::Stopwords => WEIGHT_STOPWORDS,
            Heuristic::Dictionary => WEIGHT_DICTIONARY,
            Heuristic::Frequency => WEIGHT_FREQUENCY,
            Heuristic::Bigrams => WEIGHT_BIGRAMS,
            Heuristic::Entropy => WEIGHT_ENTROPY,
        }
    }

    /// Look up a heuristic by its weight key (exact, lowercase)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
