//! Caesar Analyzer: brute force → score → rank → classify
//!
//! Tries keys 1..=25, scores every plaintext with the TextScorer, sorts by
//! composite score (stable, so ties keep key order) and derives statistics.

use std::path::Path;
use std::time::Instant;
use sha2::{Sha256, Digest};
use crate::{CIPHERTEXT_PREVIEW_CHARS, COMPARISON_PREVIEW_CHARS, DEFAULT_TOP_N};
use crate::core::{ReferenceCorpus, ShiftCipher, TextScorer, extract_words};
use crate::types::{
    AnalysisMetadata, Candidate, ComplexityDecision, ConfidenceAssessment, ConfidenceTier,
    DecisionReport, MethodComparison, MethodScores, RankedResult, ScoringStrategy,
    ScoringWeights, Statistics, TextComplexity, ValidationDecisions, make_preview,
};

/// Score above which a result is called very high in explanations
const EXPLAIN_VERY_HIGH: f64 = 80.0;
const EXPLAIN_HIGH: f64 = 60.0;
const EXPLAIN_LARGE_GAP: f64 = 20.0;
const EXPLAIN_SIGNIFICANT_GAP: f64 = 10.0;
const EXPLAIN_HIGH_DISPERSION: f64 = 15.0;

/// The scoring and decision engine
///
/// Holds only immutable lookup tables and the default weights, so one
/// instance can be shared freely across analyses and threads.
#[derive(Debug, Clone, Default)]
pub struct CaesarAnalyzer {
    cipher: ShiftCipher,
    scorer: TextScorer,
    weights: ScoringWeights,
}

impl CaesarAnalyzer {
    /// Load the reference corpus from `data_dir` (built-in sets if absent)
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_corpus(ReferenceCorpus::load(data_dir))
    }

    /// Engine over an already loaded corpus
    pub fn with_corpus(corpus: ReferenceCorpus) -> Self {
        Self {
            cipher: ShiftCipher::new(),
            scorer: TextScorer::new(corpus),
            weights: ScoringWeights::default(),
        }
    }

    /// Replace the weights used when a call passes none
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn scorer(&self) -> &TextScorer {
        &self.scorer
    }

    pub fn cipher(&self) -> &ShiftCipher {
        &self.cipher
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Composite score of arbitrary text
    pub fn score(&self, text: &str, weights: Option<&ScoringWeights>) -> f64 {
        self.scorer
            .combined_score(text, Some(weights.unwrap_or(&self.weights)))
    }

    /// Confidence tier for a composite score
    pub fn classify_confidence(&self, score: f64) -> ConfidenceTier {
        ConfidenceTier::from_score(score)
    }

    /// Break `ciphertext`: every key scored and ranked, top-N returned
    pub fn rank(
        &self,
        ciphertext: &str,
        top_n: usize,
        weights: Option<&ScoringWeights>,
    ) -> RankedResult {
        let start = Instant::now();
        let weights = weights.unwrap_or(&self.weights);

        let mut candidates: Vec<Candidate> = self
            .cipher
            .brute_force(ciphertext)
            .into_iter()
            .map(|(key, plaintext)| {
                let score = self.scorer.combined_score(&plaintext, Some(weights));
                Candidate::new(key, plaintext, score)
            })
            .collect();

        // Vec::sort_by is stable: equal scores stay in key order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        let scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
        let mut statistics = Statistics::from_ranked_scores(&scores);

        let best_solution = candidates.first().cloned();
        candidates.truncate(top_n);

        let frequency_analysis = self.cipher.frequency_analysis(ciphertext);
        let metadata = build_metadata(ciphertext, weights);

        statistics.analysis_time_seconds = start.elapsed().as_secs_f64();

        match &best_solution {
            Some(best) => tracing::debug!(
                "Ranked {} hypotheses: best key={} score={:.2} gap={:.2}",
                statistics.total_hypotheses,
                best.key,
                best.score,
                statistics.confidence_gap
            ),
            None => tracing::debug!("Empty ciphertext, no hypotheses"),
        }

        RankedResult {
            best_solution,
            top_solutions: candidates,
            statistics,
            frequency_analysis,
            metadata,
        }
    }

    /// Length-based reliability of an analysis on `text`
    pub fn text_complexity(&self, text: &str) -> TextComplexity {
        let word_count = extract_words(text).len();
        let letter_count = text.chars().filter(|c| c.is_alphabetic()).count();
        TextComplexity::from_counts(word_count, letter_count)
    }

    /// Per-heuristic scores of the `top_n` best hypotheses and the strongest heuristic
    pub fn compare_methods(&self, ciphertext: &str, top_n: usize) -> MethodComparison {
        let mut comparison: Vec<MethodScores> = self
            .cipher
            .brute_force(ciphertext)
            .into_iter()
            .map(|(key, plaintext)| MethodScores {
                key,
                plaintext_preview: make_preview(&plaintext, COMPARISON_PREVIEW_CHARS),
                scores: self.scorer.analyze_weighted(&plaintext, Some(&self.weights)),
            })
            .collect();

        comparison.sort_by(|a, b| b.scores.combined.total_cmp(&a.scores.combined));

        let best_method = comparison.first().map(|m| m.scores.strongest());
        comparison.truncate(top_n);

        MethodComparison {
            ciphertext_preview: make_preview(ciphertext, CIPHERTEXT_PREVIEW_CHARS),
            method_comparison: comparison,
            best_method,
            recommendation: MethodComparison::recommendation_for(best_method),
        }
    }

    /// Complexity, strategy, confidence and validation decisions for one ciphertext
    pub fn decision_report(&self, ciphertext: &str) -> DecisionReport {
        let result = self.rank(ciphertext, DEFAULT_TOP_N, None);
        let complexity = self.text_complexity(ciphertext);

        let confidence_assessment = match &result.best_solution {
            Some(best) => ConfidenceAssessment {
                score: best.score,
                level: Some(best.confidence),
                justification: explain_confidence(&result),
            },
            None => ConfidenceAssessment {
                score: 0.0,
                level: None,
                justification: "No reliable solution".to_string(),
            },
        };

        DecisionReport {
            text_complexity_decision: ComplexityDecision {
                length_class: complexity.length_class,
                reliability_warning: complexity.reliability,
                recommended_action: complexity.recommendation.clone(),
            },
            scoring_strategy: ScoringStrategy {
                weights_applied: self.weights.as_map().clone(),
                focus_area: complexity.analysis_focus.clone(),
            },
            confidence_assessment,
            validation_decisions: ValidationDecisions {
                is_text_analyzable: complexity.is_analyzable,
                needs_calibration: complexity.needs_calibration,
                vocabulary_quality: complexity.vocabulary_assessment,
            },
        }
    }
}

/// Why the best solution deserves (or lacks) confidence
pub fn explain_confidence(result: &RankedResult) -> String {
    let best = match &result.best_solution {
        Some(b) => b,
        None => return "No solution found".to_string(),
    };
    let stats = &result.statistics;

    let mut reasons = Vec::new();

    if best.score >= EXPLAIN_VERY_HIGH {
        reasons.push("Very high score (>80)");
    } else if best.score >= EXPLAIN_HIGH {
        reasons.push("High score (60-80)");
    }

    if stats.confidence_gap > EXPLAIN_LARGE_GAP {
        reasons.push("Large gap to second solution");
    } else if stats.confidence_gap > EXPLAIN_SIGNIFICANT_GAP {
        reasons.push("Significant gap to second solution");
    }

    if stats.std_deviation > EXPLAIN_HIGH_DISPERSION {
        reasons.push("High score dispersion, clear solution");
    }

    if reasons.is_empty() {
        "Average score with no distinctive trait".to_string()
    } else {
        reasons.join("; ")
    }
}

fn build_metadata(ciphertext: &str, weights: &ScoringWeights) -> AnalysisMetadata {
    AnalysisMetadata {
        ciphertext_length: ciphertext.chars().count(),
        alphabetic_chars: ciphertext.chars().filter(|c| c.is_alphabetic()).count(),
        ciphertext_sha256: sha256_hex(ciphertext.as_bytes()),
        analysis_date: chrono::Utc::now(),
        scoring_methods: weights.active().iter().map(|h| h.name().to_string()).collect(),
        weights_used: weights.as_map().clone(),
    }
}

/// SHA-256 as lowercase hex
fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
