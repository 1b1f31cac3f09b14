//! Confidence tiers derived from the composite score

use colored::Color;
use serde::{Deserialize, Serialize};
use crate::{TIER_VERY_HIGH, TIER_HIGH, TIER_MEDIUM, TIER_LOW};

/// Discrete confidence label for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ConfidenceTier {
    /// Threshold ladder, lower bound of each band inclusive
    pub fn from_score(score: f64) -> Self {
        if score >= TIER_VERY_HIGH {
            ConfidenceTier::VeryHigh
        } else if score >= TIER_HIGH {
            ConfidenceTier::High
        } else if score >= TIER_MEDIUM {
            ConfidenceTier::Medium
        } else if score >= TIER_LOW {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::VeryLow
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::VeryHigh => "Very High",
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
            ConfidenceTier::VeryLow => "Very Low",
        }
    }

    /// Terminal color for this tier
    pub fn color(&self) -> Color {
        match self {
            ConfidenceTier::VeryHigh => Color::Green,
            ConfidenceTier::High => Color::BrightGreen,
            ConfidenceTier::Medium => Color::Yellow,
            ConfidenceTier::Low => Color::BrightRed,
            ConfidenceTier::VeryLow => Color::Red,
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive() {
        assert_eq!(ConfidenceTier::from_score(80.0), ConfidenceTier::VeryHigh);
        assert_eq!(ConfidenceTier::from_score(60.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(40.0), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(20.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(19.99), ConfidenceTier::VeryLow);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(ConfidenceTier::from_score(95.0).label(), "Very High");
        assert_eq!(ConfidenceTier::from_score(75.0).label(), "High");
        assert_eq!(ConfidenceTier::from_score(55.0).label(), "Medium");
        assert_eq!(ConfidenceTier::from_score(25.0).label(), "Low");
        assert_eq!(ConfidenceTier::from_score(5.0).label(), "Very Low");
        assert_eq!(ConfidenceTier::from_score(0.0).label(), "Very Low");
        assert_eq!(ConfidenceTier::from_score(100.0).label(), "Very High");
    }

    #[test]
    fn test_tiers_ordered() {
        assert!(ConfidenceTier::VeryHigh > ConfidenceTier::High);
        assert!(ConfidenceTier::Low > ConfidenceTier::VeryLow);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&ConfidenceTier::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        let back: ConfidenceTier = serde_json::from_str("\"Very Low\"").unwrap();
        assert_eq!(back, ConfidenceTier::VeryLow);
    }
}
