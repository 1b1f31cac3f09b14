//! Scoring weights for the combined score
//!
//! A name → weight map. Only the five heuristic names participate; unknown
//! keys are carried along but ignored, missing keys weigh zero. Weights are
//! normalized by their total at use, so they need not sum to 1.

use std::collections::BTreeMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::Heuristic;

/// Heuristic name → non-negative weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringWeights {
    weights: BTreeMap<String, f64>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weights: Heuristic::ALL
                .iter()
                .map(|h| (h.name().to_string(), h.default_weight()))
                .collect(),
        }
    }
}

impl ScoringWeights {
    /// Empty map: every heuristic weighs zero
    pub fn empty() -> Self {
        Self { weights: BTreeMap::new() }
    }

    /// Build from an arbitrary name → weight map
    pub fn from_map(weights: BTreeMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Builder-style override of one heuristic's weight
    pub fn with(mut self, heuristic: Heuristic, weight: f64) -> Self {
        self.weights.insert(heuristic.name().to_string(), weight);
        self
    }

    /// Weight for a heuristic; missing, negative and non-finite entries weigh 0.0
    pub fn get(&self, heuristic: Heuristic) -> f64 {
        self.weights
            .get(heuristic.name())
            .copied()
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(0.0)
    }

    /// Sum of the weights that actually participate
    pub fn total(&self) -> f64 {
        Heuristic::ALL.iter().map(|h| self.get(*h)).sum()
    }

    /// Every weight multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            weights: self
                .weights
                .iter()
                .map(|(k, v)| (k.clone(), v * factor))
                .collect(),
        }
    }

    /// Heuristics with a non-zero weight
    pub fn active(&self) -> Vec<Heuristic> {
        Heuristic::ALL
            .into_iter()
            .filter(|h| self.get(*h) > 0.0)
            .collect()
    }

    /// Raw map, unknown keys included
    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    /// Reject negative or non-finite weights on recognized keys
    pub fn validate(&self) -> AnalyzerResult<()> {
        for (name, &value) in &self.weights {
            if Heuristic::from_name(name).is_none() {
                tracing::warn!("Unknown weight '{}' ignored", name);
                continue;
            }
            if !value.is_finite() || value < 0.0 {
                return Err(AnalyzerError::InvalidWeight {
                    name: name.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Parse a JSON object like `{"stopwords": 0.5, "entropy": 0}`
    pub fn from_json_str(json: &str) -> AnalyzerResult<Self> {
        let map: BTreeMap<String, f64> = serde_json::from_str(json)?;
        let weights = Self::from_map(map);
        weights.validate()?;
        Ok(weights)
    }

    /// Load weights from a JSON file
    pub fn load(path: impl AsRef<Path>) -> AnalyzerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AnalyzerError::io(path, e))?;
        let weights = Self::from_json_str(&json)?;
        tracing::debug!("Loaded scoring weights from {}: {:?}", path.display(), weights.weights);
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_all_five() {
        let w = ScoringWeights::default();
        assert_eq!(w.as_map().len(), 5);
        assert_eq!(w.get(Heuristic::Stopwords), 0.30);
        assert_eq!(w.get(Heuristic::Entropy), 0.10);
        assert!((w.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_key_weighs_zero() {
        let w = ScoringWeights::empty().with(Heuristic::Frequency, 2.0);
        assert_eq!(w.get(Heuristic::Stopwords), 0.0);
        assert_eq!(w.total(), 2.0);
        assert_eq!(w.active(), vec![Heuristic::Frequency]);
    }

    #[test]
    fn test_unknown_keys_ignored_in_total() {
        let w = ScoringWeights::from_json_str(r#"{"stopwords": 1.0, "trigrams": 5.0}"#).unwrap();
        assert_eq!(w.total(), 1.0);
        assert_eq!(w.as_map().len(), 2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = ScoringWeights::from_json_str(r#"{"bigrams": -0.5}"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidWeight { ref name, .. } if name == "bigrams"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = ScoringWeights::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AnalyzerError::Json(_)));
    }

    #[test]
    fn test_invalid_entries_weigh_zero() {
        let mut map = BTreeMap::new();
        map.insert("stopwords".to_string(), -1.0);
        map.insert("dictionary".to_string(), 2.0);
        map.insert("entropy".to_string(), f64::INFINITY);
        map.insert("bigrams".to_string(), f64::NAN);
        let w = ScoringWeights::from_map(map);

        assert_eq!(w.get(Heuristic::Stopwords), 0.0);
        assert_eq!(w.get(Heuristic::Entropy), 0.0);
        assert_eq!(w.get(Heuristic::Bigrams), 0.0);
        assert_eq!(w.total(), 2.0);
        assert_eq!(w.active(), vec![Heuristic::Dictionary]);
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_scaled_doubles_every_weight() {
        let w = ScoringWeights::default().scaled(2.0);
        assert!((w.total() - 2.0).abs() < 1e-12);
        assert_eq!(w.get(Heuristic::Dictionary), 0.5);
    }
}
