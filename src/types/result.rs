//! Ranked result set returned by the analyzer

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Candidate, FrequencyAnalysis};

/// Summary statistics over all scored hypotheses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of hypotheses scored (25, or 0 for empty input)
    pub total_hypotheses: usize,
    pub min_score: f64,
    pub max_score: f64,
    pub mean_score: f64,
    /// Population standard deviation; 0 with fewer than 2 scores
    pub std_deviation: f64,
    /// Rank 0 minus rank 1; 0 with fewer than 2 candidates
    pub confidence_gap: f64,
    /// Wall time for the whole analysis
    pub analysis_time_seconds: f64,
}

impl Statistics {
    /// Derive statistics from scores sorted in descending order
    pub fn from_ranked_scores(scores: &[f64]) -> Self {
        let n = scores.len();
        if n == 0 {
            return Self::default();
        }

        let mean = scores.iter().sum::<f64>() / n as f64;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let std_deviation = if n < 2 {
            0.0
        } else {
            let variance = scores.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
            variance.sqrt()
        };

        let confidence_gap = if n < 2 { 0.0 } else { scores[0] - scores[1] };

        Self {
            total_hypotheses: n,
            min_score: min,
            max_score: max,
            mean_score: mean,
            std_deviation,
            confidence_gap,
            analysis_time_seconds: 0.0,
        }
    }
}

/// Facts about the input and the scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Length of the ciphertext in characters
    pub ciphertext_length: usize,
    /// Alphabetic characters in the ciphertext
    pub alphabetic_chars: usize,
    /// Hex SHA-256 of the ciphertext bytes
    pub ciphertext_sha256: String,
    pub analysis_date: DateTime<Utc>,
    /// Heuristics with a non-zero weight
    pub scoring_methods: Vec<String>,
    pub weights_used: BTreeMap<String, f64>,
}

/// Full outcome of breaking one ciphertext
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// Rank 0; None only for empty ciphertext
    pub best_solution: Option<Candidate>,
    /// Ranked candidates truncated to the requested top-N
    pub top_solutions: Vec<Candidate>,
    pub statistics: Statistics,
    pub frequency_analysis: FrequencyAnalysis,
    pub metadata: AnalysisMetadata,
}

impl RankedResult {
    /// Was any solution produced?
    pub fn has_solution(&self) -> bool {
        self.best_solution.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores() {
        let s = Statistics::from_ranked_scores(&[]);
        assert_eq!(s.total_hypotheses, 0);
        assert_eq!(s.std_deviation, 0.0);
        assert_eq!(s.confidence_gap, 0.0);
    }

    #[test]
    fn test_single_score() {
        let s = Statistics::from_ranked_scores(&[42.0]);
        assert_eq!(s.total_hypotheses, 1);
        assert_eq!(s.min_score, 42.0);
        assert_eq!(s.max_score, 42.0);
        assert_eq!(s.mean_score, 42.0);
        assert_eq!(s.std_deviation, 0.0);
        assert_eq!(s.confidence_gap, 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        // mean 5, squared deviations 9,1,1,9 → variance 5
        let s = Statistics::from_ranked_scores(&[8.0, 6.0, 4.0, 2.0]);
        assert_eq!(s.mean_score, 5.0);
        assert!((s.std_deviation - 5.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(s.confidence_gap, 2.0);
        assert_eq!(s.min_score, 2.0);
        assert_eq!(s.max_score, 8.0);
    }

    #[test]
    fn test_identical_scores_zero_spread() {
        let s = Statistics::from_ranked_scores(&[30.0; 25]);
        assert_eq!(s.std_deviation, 0.0);
        assert_eq!(s.confidence_gap, 0.0);
    }
}
