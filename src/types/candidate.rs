//! Scored decryption hypotheses

use serde::{Deserialize, Serialize};
use crate::PREVIEW_CHARS;
use crate::types::{ConfidenceTier, Heuristic};

/// One (key, plaintext) hypothesis with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Shift that was undone to get the plaintext (1-25)
    pub key: u8,
    /// Candidate plaintext
    pub plaintext: String,
    /// Composite score 0-100
    pub score: f64,
    /// Tier derived from `score`
    pub confidence: ConfidenceTier,
    /// First characters of the plaintext for display
    pub preview: String,
}

impl Candidate {
    /// Create a candidate; confidence and preview are derived
    pub fn new(key: u8, plaintext: String, score: f64) -> Self {
        let preview = make_preview(&plaintext, PREVIEW_CHARS);
        Self {
            key,
            plaintext,
            score,
            confidence: ConfidenceTier::from_score(score),
            preview,
        }
    }
}

/// Truncate to `max` chars, appending "..." when something was cut
pub fn make_preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Per-heuristic scores for one text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub stopwords: f64,
    pub dictionary: f64,
    pub frequency: f64,
    pub bigrams: f64,
    pub entropy: f64,
    /// Weighted composite of the five
    pub combined: f64,
}

impl ScoreBreakdown {
    /// Score for a single heuristic
    pub fn get(&self, heuristic: Heuristic) -> f64 {
        match heuristic {
            Heuristic::Stopwords => self.stopwords,
            Heuristic::Dictionary => self.dictionary,
            Heuristic::Frequency => self.frequency,
            Heuristic::Bigrams => self.bigrams,
            Heuristic::Entropy => self.entropy,
        }
    }

    /// Heuristic with the highest individual score (first wins on ties)
    pub fn strongest(&self) -> Heuristic {
        let mut best = Heuristic::ALL[0];
        for h in Heuristic::ALL {
            if self.get(h) > self.get(best) {
                best = h;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_derives_confidence() {
        let c = Candidate::new(3, "hello".to_string(), 61.0);
        assert_eq!(c.confidence, ConfidenceTier::High);
        assert_eq!(c.preview, "hello");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "a".repeat(130);
        let c = Candidate::new(1, text, 10.0);
        assert_eq!(c.preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(c.preview.ends_with("..."));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(make_preview(&text, 3), "ééé...");
        assert_eq!(make_preview(&text, 5), text);
    }

    #[test]
    fn test_strongest_heuristic() {
        let b = ScoreBreakdown {
            stopwords: 10.0,
            dictionary: 90.0,
            frequency: 90.0,
            bigrams: 0.0,
            entropy: 50.0,
            combined: 48.0,
        };
        assert_eq!(b.strongest(), Heuristic::Dictionary);
    }
}
