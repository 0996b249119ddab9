//! Plan serialization and output

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::PlannerResult;

/// Render a plan as two-space-indented JSON with a trailing newline
pub fn render_plan(document: &Value) -> PlannerResult<String> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

/// Write a rendered plan to `<repo_root>/<output>`.
///
/// An existing file is overwritten. Parent directories are not created, so
/// an output name pointing into a missing subdirectory fails.
pub fn write_plan(repo_root: &Path, output: &str, document: &Value) -> PlannerResult<PathBuf> {
    let path = repo_root.join(output);
    fs::write(&path, render_plan(document)?)?;
    Ok(path)
}
