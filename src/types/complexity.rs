//! Length-based reliability assessment of an input text

use serde::{Deserialize, Serialize};

/// Texts shorter than this many words are `Short`
pub const SHORT_TEXT_WORDS: usize = 10;
/// Texts shorter than this many words are `Medium`
pub const MEDIUM_TEXT_WORDS: usize = 50;
/// Minimum words for a meaningful analysis
pub const ANALYZABLE_MIN_WORDS: usize = 5;
/// Below this many words the weights likely need tuning
pub const CALIBRATION_MIN_WORDS: usize = 20;

/// Coarse length class of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthClass {
    Short,
    Medium,
    Long,
}

impl LengthClass {
    pub fn from_word_count(words: usize) -> Self {
        if words < SHORT_TEXT_WORDS {
            LengthClass::Short
        } else if words < MEDIUM_TEXT_WORDS {
            LengthClass::Medium
        } else {
            LengthClass::Long
        }
    }

    /// How far the ranking can be trusted at this length
    pub fn reliability(&self) -> Reliability {
        match self {
            LengthClass::Short => Reliability::Low,
            LengthClass::Medium => Reliability::Moderate,
            LengthClass::Long => Reliability::High,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            LengthClass::Short => "Very short text - limited reliability, stopwords dominate",
            LengthClass::Medium => "Analysis feasible - stopwords and dictionary carry the ranking",
            LengthClass::Long => "Full analysis - all heuristics are reliable",
        }
    }

    pub fn probable_text_type(&self) -> &'static str {
        match self {
            LengthClass::Short => "short message",
            LengthClass::Medium => "standard text",
            LengthClass::Long => "detailed text",
        }
    }

    /// Heuristics worth trusting at this length
    pub fn analysis_focus(&self) -> &'static str {
        match self {
            LengthClass::Short => "stopwords only",
            LengthClass::Medium => "stopwords and dictionary",
            LengthClass::Long => "all heuristics",
        }
    }

    pub fn vocabulary_assessment(&self) -> &'static str {
        match self {
            LengthClass::Short => "limited",
            LengthClass::Medium => "adequate",
            LengthClass::Long => "rich",
        }
    }
}

/// Reliability of the ranking for a given text length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Reliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Reliability::Low => "low",
            Reliability::Moderate => "moderate",
            Reliability::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Word/letter statistics of a text and what they imply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComplexity {
    pub word_count: usize,
    pub letter_count: usize,
    pub length_class: LengthClass,
    pub reliability: Reliability,
    pub recommendation: String,
    pub probable_text_type: String,
    pub analysis_focus: String,
    pub vocabulary_assessment: String,
    /// Letters per word, 2 decimals; 0 without words
    pub info_density: f64,
    pub is_analyzable: bool,
    pub needs_calibration: bool,
}

impl TextComplexity {
    /// Derive the assessment from raw counts
    pub fn from_counts(word_count: usize, letter_count: usize) -> Self {
        let length_class = LengthClass::from_word_count(word_count);
        let info_density = if word_count > 0 {
            (letter_count as f64 / word_count as f64 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            word_count,
            letter_count,
            length_class,
            reliability: length_class.reliability(),
            recommendation: length_class.recommendation().to_string(),
            probable_text_type: length_class.probable_text_type().to_string(),
            analysis_focus: length_class.analysis_focus().to_string(),
            vocabulary_assessment: length_class.vocabulary_assessment().to_string(),
            info_density,
            is_analyzable: word_count >= ANALYZABLE_MIN_WORDS,
            needs_calibration: word_count < CALIBRATION_MIN_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_class_boundaries() {
        assert_eq!(LengthClass::from_word_count(0), LengthClass::Short);
        assert_eq!(LengthClass::from_word_count(9), LengthClass::Short);
        assert_eq!(LengthClass::from_word_count(10), LengthClass::Medium);
        assert_eq!(LengthClass::from_word_count(49), LengthClass::Medium);
        assert_eq!(LengthClass::from_word_count(50), LengthClass::Long);
    }

    #[test]
    fn test_info_density_rounded() {
        let c = TextComplexity::from_counts(3, 10);
        assert_eq!(c.info_density, 3.33);
        assert!(!c.is_analyzable);
        assert!(c.needs_calibration);
        assert_eq!(c.reliability, Reliability::Low);
    }

    #[test]
    fn test_no_words() {
        let c = TextComplexity::from_counts(0, 0);
        assert_eq!(c.info_density, 0.0);
        assert!(!c.is_analyzable);
    }

    #[test]
    fn test_long_text() {
        let c = TextComplexity::from_counts(60, 300);
        assert_eq!(c.length_class, LengthClass::Long);
        assert_eq!(c.reliability, Reliability::High);
        assert!(c.is_analyzable);
        assert!(!c.needs_calibration);
        assert_eq!(c.vocabulary_assessment, "rich");
    }

    #[test]
    fn test_descriptors_follow_length_class() {
        let short = TextComplexity::from_counts(4, 20);
        assert_eq!(short.probable_text_type, "short message");
        assert_eq!(short.analysis_focus, "stopwords only");
        assert_eq!(short.vocabulary_assessment, "limited");

        let medium = TextComplexity::from_counts(25, 120);
        assert_eq!(medium.probable_text_type, "standard text");
        assert_eq!(medium.analysis_focus, "stopwords and dictionary");
        assert_eq!(medium.vocabulary_assessment, "adequate");
    }
}
