//! Letter frequency analysis of raw ciphertext

use serde::{Deserialize, Serialize};

/// Letter counts of a ciphertext and the key they suggest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    /// Letters counted (case-folded)
    pub total_letters: usize,
    /// Most frequent letter, first occurrence wins ties
    pub most_common_letter: Option<char>,
    /// Shift mapping 'e' onto the most common letter
    pub estimated_key: Option<u8>,
    /// Five most frequent letters with counts
    pub top_frequencies: Vec<(char, usize)>,
    /// Ten most frequent letters with percentages
    pub percentages: Vec<(char, f64)>,
}

impl FrequencyAnalysis {
    /// Analysis of a text with no letters
    pub fn empty() -> Self {
        Self::default()
    }

    /// Were any letters found?
    pub fn is_empty(&self) -> bool {
        self.total_letters == 0
    }
}
