//! Method comparison and decision report records

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::{ConfidenceTier, Heuristic, LengthClass, Reliability, ScoreBreakdown};

/// Per-heuristic scores of one hypothesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodScores {
    pub key: u8,
    pub plaintext_preview: String,
    pub scores: ScoreBreakdown,
}

/// Heuristics side by side across the best hypotheses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    pub ciphertext_preview: String,
    /// Sorted by combined score, descending
    pub method_comparison: Vec<MethodScores>,
    /// Strongest single heuristic on the top hypothesis
    pub best_method: Option<Heuristic>,
    pub recommendation: String,
}

impl MethodComparison {
    /// Recommendation line for a (possibly missing) best method
    pub fn recommendation_for(best_method: Option<Heuristic>) -> String {
        match best_method {
            Some(h) => format!("Focus on {}", h),
            None => "Inconclusive analysis".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityDecision {
    pub length_class: LengthClass,
    pub reliability_warning: Reliability,
    pub recommended_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringStrategy {
    pub weights_applied: BTreeMap<String, f64>,
    pub focus_area: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    /// Best composite score, 0 without a solution
    pub score: f64,
    /// None when there is no solution
    pub level: Option<ConfidenceTier>,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDecisions {
    pub is_text_analyzable: bool,
    pub needs_calibration: bool,
    pub vocabulary_quality: String,
}

/// Every decision taken for one ciphertext, in one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub text_complexity_decision: ComplexityDecision,
    pub scoring_strategy: ScoringStrategy,
    pub confidence_assessment: ConfidenceAssessment,
    pub validation_decisions: ValidationDecisions,
}
