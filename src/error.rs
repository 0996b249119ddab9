//! Error types for the planner
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`
//! at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Blueprint template file not found
    #[error("blueprint template not found: {path}")]
    BlueprintNotFound { path: PathBuf },

    /// Invalid blueprint JSON
    #[error("invalid blueprint JSON in {file}: {message}")]
    InvalidBlueprint { file: PathBuf, message: String },

    /// Invalid baseline plan JSON
    #[error("invalid baseline JSON in {file}: {message}")]
    InvalidBaseline { file: PathBuf, message: String },

    /// Baseline plan parsed but the top level is not a JSON object
    #[error("baseline plan {file} is not a JSON object")]
    BaselineNotObject { file: PathBuf },

    /// Baseline carries a `project` entry that is not a JSON object
    #[error("baseline plan {file} has a non-object 'project' entry")]
    ProjectNotObject { file: PathBuf },

    /// Baseline carries a `phases` entry that is not a JSON array
    #[error("baseline plan {file} has a non-array 'phases' entry")]
    PhasesNotArray { file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
