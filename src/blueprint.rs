//! Blueprint templates for plan generation
//!
//! Two templates ship with the tool: the initial-plan blueprint and the
//! evolution blueprint whose phases are appended when an existing plan
//! grows a new cycle. Both are compiled into the binary from `assets/` so
//! the deployed binary needs no sidecar files; `--blueprint` substitutes a
//! template read from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PlannerError, PlannerResult};
use crate::plan::GenerationMode;

/// Embedded initial-plan template
const BLUEPRINT_INITIAL: &str = include_str!("../assets/task-master-blueprint.json");

/// Embedded evolution template
const BLUEPRINT_EVOLUTION: &str = include_str!("../assets/task-master-evolution.json");

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// A plan template.
///
/// Unknown keys are ignored and known keys default, so a sparse template
/// still produces a well-formed plan.
#[derive(Debug, Clone, Deserialize)]
pub struct Blueprint {
    /// Schema version stamped into generated plans
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Planning assumptions carried into fresh plans
    #[serde(default)]
    pub assumptions: Vec<Value>,

    /// Known risks carried into fresh plans
    #[serde(default)]
    pub risks: Vec<Value>,

    /// Work phases; appended to the baseline's phases in evolve mode
    #[serde(default)]
    pub phases: Vec<Value>,
}

impl Blueprint {
    /// Parse the embedded template for a generation mode
    pub fn for_mode(mode: GenerationMode) -> PlannerResult<Self> {
        let (name, raw) = match mode {
            GenerationMode::Initial => ("assets/task-master-blueprint.json", BLUEPRINT_INITIAL),
            GenerationMode::Evolve => ("assets/task-master-evolution.json", BLUEPRINT_EVOLUTION),
        };
        Self::parse(raw, Path::new(name))
    }

    /// Load a template from disk.
    ///
    /// Unlike the architecture document, a missing or malformed template
    /// is fatal.
    pub fn from_path(path: &Path) -> PlannerResult<Self> {
        if !path.exists() {
            return Err(PlannerError::BlueprintNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, file: &Path) -> PlannerResult<Self> {
        serde_json::from_str(raw).map_err(|err| PlannerError::InvalidBlueprint {
            file: file.to_path_buf(),
            message: err.to_string(),
        })
    }
}
