//! CTF flag search over ranked solutions

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::RankedResult;

lazy_static! {
    // FLAG{...} in any case; the inner part cannot contain '}'
    static ref RE_FLAG: Regex = Regex::new(r"(?i)FLAG\{([^}]+)\}").unwrap();
}

/// First flag in a text, normalized to upper-case `FLAG{inner}`
pub fn find_flag_in_text(text: &str) -> Option<String> {
    RE_FLAG
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| format!("FLAG{{{}}}", inner.as_str()))
}

/// Scan the returned top solutions in rank order
pub fn find_flag(result: &RankedResult) -> Option<String> {
    result
        .top_solutions
        .iter()
        .find_map(|c| find_flag_in_text(&c.plaintext))
}

/// Write the flag to `path` if one is found; returns the flag
pub fn save_flag(result: &RankedResult, path: impl AsRef<Path>) -> AnalyzerResult<Option<String>> {
    let path = path.as_ref();
    let flag = match find_flag(result) {
        Some(f) => f,
        None => return Ok(None),
    };

    std::fs::write(path, &flag).map_err(|e| AnalyzerError::io(path, e))?;
    tracing::info!("Flag saved to {}", path.display());
    Ok(Some(flag))
}

// =============================================================================
// TESTS
// =============================================================================
