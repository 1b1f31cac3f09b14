//! Core types for Shiftbreak

mod heuristic;
mod weights;
mod confidence;
mod candidate;
mod result;
mod frequency;
mod complexity;
mod decision;

pub use heuristic::Heuristic;
pub use weights::ScoringWeights;
pub use confidence::ConfidenceTier;
pub use candidate::{Candidate, ScoreBreakdown, make_preview};
pub use result::{RankedResult, Statistics, AnalysisMetadata};
pub use frequency::FrequencyAnalysis;
pub use complexity::{
    TextComplexity, LengthClass, Reliability,
    SHORT_TEXT_WORDS, MEDIUM_TEXT_WORDS, ANALYZABLE_MIN_WORDS, CALIBRATION_MIN_WORDS,
};
pub use decision::{
    MethodScores, MethodComparison, DecisionReport,
    ComplexityDecision, ScoringStrategy, ConfidenceAssessment, ValidationDecisions,
};
