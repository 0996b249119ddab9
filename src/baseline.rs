//! Baseline plan loading for evolve mode

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{PlannerError, PlannerResult};

/// A prior plan loaded for extension
#[derive(Debug, Clone)]
pub struct LoadedBaseline {
    /// Resolved path the baseline was read from
    pub path: PathBuf,
    /// Parsed plan document
    pub document: Map<String, Value>,
}

/// Resolve a baseline argument against the repository root.
///
/// Relative paths are taken relative to `repo_root`, absolute paths are
/// used as-is.
pub fn resolve_baseline_path(repo_root: &Path, baseline: &Path) -> PathBuf {
    if baseline.is_absolute() {
        baseline.to_path_buf()
    } else {
        repo_root.join(baseline)
    }
}

/// Load the baseline plan if the file exists.
///
/// A missing file is not an error: the run proceeds as if no baseline was
/// supplied. An existing file that fails to parse, or parses to something
/// other than a JSON object, is fatal.
pub fn load_baseline(repo_root: &Path, baseline: &Path) -> PlannerResult<Option<LoadedBaseline>> {
    let path = resolve_baseline_path(repo_root, baseline);
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)?;
    let document: Value =
        serde_json::from_str(&raw).map_err(|err| PlannerError::InvalidBaseline {
            file: path.clone(),
            message: err.to_string(),
        })?;

    match document {
        Value::Object(map) => Ok(Some(LoadedBaseline {
            path,
            document: map,
        })),
        _ => Err(PlannerError::BaselineNotObject { file: path }),
    }
}
