//! Plan document model and merge rules
//!
//! Fresh generation builds a [`PlanDocument`] from the blueprint and the
//! extracted architecture fields. Evolve generation takes the baseline
//! document as-is and edits it in place: run metadata is overwritten, the
//! blueprint's phases are appended, and everything else the baseline
//! carried survives untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::architecture::ArchitectureFields;
use crate::baseline::LoadedBaseline;
use crate::blueprint::Blueprint;
use crate::error::{PlannerError, PlannerResult};

/// Identity tag written into every generated plan
pub const GENERATED_BY: &str = "task-master-planner";

/// Plan generation mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Produce a fresh plan from the initial blueprint
    #[default]
    Initial,
    /// Append the evolution blueprint's phases to an existing plan
    Evolve,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Initial => "initial",
            GenerationMode::Evolve => "evolve",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values scoped to a single planner run.
///
/// The date and resolved root are plain strings so tests can pin them.
#[derive(Debug, Clone)]
pub struct PlanContext {
    /// Resolved repository root as written into the plan
    pub repo_root: String,
    /// ISO date written as `generated_on`
    pub generated_on: String,
    /// Mode written as `generation_mode`
    pub mode: GenerationMode,
}

/// Project metadata block of a fresh plan.
///
/// Field order here is serialization order in the written file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: String,
    pub repo_root: String,
    pub generated_on: String,
    pub generated_by: String,
    pub generation_mode: GenerationMode,
    #[serde(default)]
    pub assumptions: Vec<Value>,
    #[serde(default)]
    pub risks: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_last_updated: Option<String>,
}

/// A freshly generated plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub schema_version: String,
    pub project: ProjectSection,
    pub phases: Vec<Value>,
}

/// Build a fresh plan from a blueprint and the extracted fields
pub fn fresh_plan(
    blueprint: &Blueprint,
    fields: &ArchitectureFields,
    ctx: &PlanContext,
) -> PlanDocument {
    PlanDocument {
        schema_version: blueprint.schema_version.clone(),
        project: ProjectSection {
            name: fields.project_name.clone(),
            repo_root: ctx.repo_root.clone(),
            generated_on: ctx.generated_on.clone(),
            generated_by: GENERATED_BY.to_string(),
            generation_mode: ctx.mode,
            assumptions: blueprint.assumptions.clone(),
            risks: blueprint.risks.clone(),
            source_last_updated: fields.last_updated.clone(),
        },
        phases: blueprint.phases.clone(),
    }
}

/// Extend a baseline plan with a blueprint's phases.
///
/// Run metadata (`repo_root`, `generated_on`, `generated_by`,
/// `generation_mode`) always overwrites the baseline's. `assumptions` and
/// `risks` are only filled in when the baseline lacks them. Baseline keys
/// the planner does not know about pass through unchanged, existing keys
/// keep their position in the document.
pub fn evolve_plan(
    baseline: LoadedBaseline,
    blueprint: &Blueprint,
    fields: &ArchitectureFields,
    ctx: &PlanContext,
) -> PlannerResult<Value> {
    let LoadedBaseline {
        path,
        document: mut root,
    } = baseline;

    let project = root
        .entry("project")
        .or_insert_with(|| Value::Object(Map::new()));
    let project = project
        .as_object_mut()
        .ok_or_else(|| PlannerError::ProjectNotObject { file: path.clone() })?;

    project.insert("repo_root".to_string(), Value::String(ctx.repo_root.clone()));
    project.insert(
        "generated_on".to_string(),
        Value::String(ctx.generated_on.clone()),
    );
    project.insert(
        "generated_by".to_string(),
        Value::String(GENERATED_BY.to_string()),
    );
    project.insert(
        "generation_mode".to_string(),
        Value::String(ctx.mode.to_string()),
    );
    if !project.contains_key("assumptions") {
        project.insert("assumptions".to_string(), Value::Array(Vec::new()));
    }
    if !project.contains_key("risks") {
        project.insert("risks".to_string(), Value::Array(Vec::new()));
    }
    if let Some(last_updated) = &fields.last_updated {
        project.insert(
            "source_last_updated".to_string(),
            Value::String(last_updated.clone()),
        );
    }

    let mut phases = match root.get("phases") {
        Some(Value::Array(existing)) => existing.clone(),
        Some(_) => return Err(PlannerError::PhasesNotArray { file: path }),
        None => Vec::new(),
    };
    phases.extend(blueprint.phases.iter().cloned());
    root.insert("phases".to_string(), Value::Array(phases));

    Ok(Value::Object(root))
}
