//! JSON export and loading of ranked results

use std::path::Path;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::RankedResult;

/// Pretty JSON for a result
pub fn to_json(result: &RankedResult) -> AnalyzerResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Save result as pretty JSON, creating parent directories
pub fn export_results(result: &RankedResult, path: impl AsRef<Path>) -> AnalyzerResult<()> {
    let path = path.as_ref();
    let json = to_json(result)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AnalyzerError::io(parent, e))?;
    }

    std::fs::write(path, json).map_err(|e| AnalyzerError::io(path, e))?;
    tracing::info!("Results exported to {}", path.display());
    Ok(())
}

/// Load a previously exported result
pub fn load_results(path: impl AsRef<Path>) -> AnalyzerResult<RankedResult> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}

/// Read a ciphertext file, trimmed; empty content is an error
pub fn read_ciphertext(path: impl AsRef<Path>) -> AnalyzerResult<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::EmptyInput(path.to_path_buf()));
    }
    Ok(trimmed.to_string())
}
