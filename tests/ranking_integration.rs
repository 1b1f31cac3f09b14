//! Integration tests for ranking
//!
//! Tests the full path: plaintext → ShiftCipher::encrypt → CaesarAnalyzer::rank

use pretty_assertions::assert_eq;
use shiftbreak::core::{CaesarAnalyzer, ReferenceCorpus, ShiftCipher, explain_confidence};
use shiftbreak::types::{ConfidenceTier, ScoringWeights};
use shiftbreak::{MAX_KEY, MIN_KEY};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

const PARAGRAPH: &str = "In cryptography, a Caesar cipher is one of the simplest and most \
    widely known encryption techniques. It is a type of substitution cipher in which each \
    letter in the plaintext is replaced by a letter some fixed number of positions down the \
    alphabet. The method is named after Julius Caesar, who used it in his private correspondence.";

fn shipped() -> CaesarAnalyzer {
    CaesarAnalyzer::new(DATA_DIR)
}

fn builtin() -> CaesarAnalyzer {
    CaesarAnalyzer::with_corpus(ReferenceCorpus::builtin())
}

/// Known plaintext encrypted with key 7 comes back as the best solution
#[test]
fn test_recovers_key_seven() {
    let plaintext = "The Caesar cipher is one of the simplest encryption techniques";
    let ciphertext = ShiftCipher::new().encrypt(plaintext, 7);

    let result = shipped().rank(&ciphertext, 5, None);
    let best = result.best_solution.expect("non-empty input has a best solution");

    assert_eq!(best.key, 7);
    assert_eq!(best.plaintext, plaintext);
}

/// A paragraph is recovered even with the built-in word sets
#[test]
fn test_recovers_paragraph_builtin_corpus() {
    let ciphertext = ShiftCipher::new().encrypt(PARAGRAPH, 3);

    let result = builtin().rank(&ciphertext, 5, None);
    let best = result.best_solution.unwrap();

    assert_eq!(best.key, 3);
    assert_eq!(best.plaintext, PARAGRAPH);
    assert!(result.statistics.confidence_gap > 0.0);
}

#[test]
fn test_recovers_with_both_corpora() {
    let plaintext = "The quick brown fox jumps over the lazy dog and then the dog was very happy about it";
    let ciphertext = ShiftCipher::new().encrypt(plaintext, 13);

    for analyzer in [builtin(), shipped()] {
        let best = analyzer.rank(&ciphertext, 1, None).best_solution.unwrap();
        assert_eq!(best.key, 13);
        assert_eq!(best.plaintext, plaintext);
    }
}

/// Every key 1..=25 appears exactly once
#[test]
fn test_all_keys_unique() {
    let result = shipped().rank("Wkh vhfuhw lv kurxjk", 25, None);

    let mut keys: Vec<u8> = result.top_solutions.iter().map(|c| c.key).collect();
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), 25);
    assert_eq!(keys.first(), Some(&MIN_KEY));
    assert_eq!(keys.last(), Some(&MAX_KEY));
}

/// Same input, same ranking
#[test]
fn test_ranking_is_deterministic() {
    let analyzer = shipped();
    let ciphertext = ShiftCipher::new().encrypt(PARAGRAPH, 19);

    let a = analyzer.rank(&ciphertext, 25, None);
    let b = analyzer.rank(&ciphertext, 25, None);

    assert_eq!(a.top_solutions, b.top_solutions);
    assert_eq!(a.best_solution, b.best_solution);
    assert_eq!(a.statistics.confidence_gap, b.statistics.confidence_gap);
}

/// Each candidate carries the tier of its own score
#[test]
fn test_candidates_classified() {
    let result = shipped().rank(&ShiftCipher::new().encrypt(PARAGRAPH, 5), 25, None);

    for c in &result.top_solutions {
        assert!((0.0..=100.0).contains(&c.score));
        assert_eq!(c.confidence, ConfidenceTier::from_score(c.score));
        assert!(c.preview.chars().count() <= shiftbreak::PREVIEW_CHARS + 3);
    }
}

/// Statistics agree with the candidate scores
#[test]
fn test_statistics_consistent() {
    let result = shipped().rank(&ShiftCipher::new().encrypt(PARAGRAPH, 11), 25, None);
    let stats = &result.statistics;
    let scores: Vec<f64> = result.top_solutions.iter().map(|c| c.score).collect();

    assert_eq!(stats.total_hypotheses, 25);
    assert_eq!(stats.max_score, scores[0]);
    assert_eq!(stats.min_score, scores[24]);
    assert!(stats.min_score <= stats.mean_score && stats.mean_score <= stats.max_score);
    assert!(stats.std_deviation >= 0.0);
    assert!((stats.confidence_gap - (scores[0] - scores[1])).abs() < 1e-12);
    assert!(stats.analysis_time_seconds >= 0.0);
}

/// Truncation never changes the best solution or the statistics
#[test]
fn test_top_n_does_not_affect_statistics() {
    let analyzer = shipped();
    let ciphertext = ShiftCipher::new().encrypt(PARAGRAPH, 8);

    let full = analyzer.rank(&ciphertext, 25, None);
    let short = analyzer.rank(&ciphertext, 2, None);

    assert_eq!(short.top_solutions.len(), 2);
    assert_eq!(full.best_solution, short.best_solution);
    assert_eq!(full.statistics.mean_score, short.statistics.mean_score);
    assert_eq!(full.statistics.std_deviation, short.statistics.std_deviation);
}

/// Per-call weights override the engine weights
#[test]
fn test_custom_weights_in_rank() {
    let analyzer = shipped();
    let ciphertext = ShiftCipher::new().encrypt(PARAGRAPH, 4);
    let dictionary_only = ScoringWeights::empty()
        .with(shiftbreak::types::Heuristic::Dictionary, 1.0);

    let result = analyzer.rank(&ciphertext, 3, Some(&dictionary_only));

    assert_eq!(result.best_solution.unwrap().key, 4);
    assert_eq!(result.metadata.scoring_methods, vec!["dictionary".to_string()]);
}

/// Frequency analysis runs on the ciphertext, not on a candidate
#[test]
fn test_frequency_analysis_on_ciphertext() {
    let result = shipped().rank("Wkh hhh", 5, None);
    let fa = &result.frequency_analysis;

    assert_eq!(fa.total_letters, 6);
    assert_eq!(fa.most_common_letter, Some('h'));
    // 'h' is 'e' shifted by 3
    assert_eq!(fa.estimated_key, Some(3));
}

#[test]
fn test_explanation_for_clear_winner() {
    let result = shipped().rank(&ShiftCipher::new().encrypt(PARAGRAPH, 3), 5, None);
    let explanation = explain_confidence(&result);

    assert!(!explanation.is_empty());
    assert!(explanation.contains("gap") || explanation.contains("score"));
}

/// Method comparison agrees with the ranking on which key wins
#[test]
fn test_compare_methods_matches_rank() {
    let analyzer = shipped();
    let ciphertext = ShiftCipher::new().encrypt(PARAGRAPH, 7);

    let ranked = analyzer.rank(&ciphertext, 5, None);
    let comparison = analyzer.compare_methods(&ciphertext, 5);

    let ranked_keys: Vec<u8> = ranked.top_solutions.iter().map(|c| c.key).collect();
    let compared_keys: Vec<u8> = comparison.method_comparison.iter().map(|m| m.key).collect();
    assert_eq!(compared_keys, ranked_keys);
    assert!(comparison.best_method.is_some());
    assert!(comparison.ciphertext_preview.ends_with("..."));
}

/// The decision report of a long paragraph trusts every heuristic
#[test]
fn test_decision_report_long_text() {
    let report = shipped().decision_report(&ShiftCipher::new().encrypt(PARAGRAPH, 7));

    assert_eq!(report.scoring_strategy.focus_area, "all heuristics");
    assert!(report.validation_decisions.is_text_analyzable);
    assert!(!report.validation_decisions.needs_calibration);
    assert!(report.confidence_assessment.level.is_some());
    assert!(report.confidence_assessment.justification.contains("gap"));
}
