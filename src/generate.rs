//! Plan generation use case
//!
//! Ties the pipeline together: resolve the repository root, extract the
//! architecture fields, pick a blueprint, optionally load a baseline,
//! merge, and write the plan file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;

use crate::architecture::{self, ARCHITECTURE_FILE};
use crate::baseline;
use crate::blueprint::Blueprint;
use crate::error::PlannerResult;
use crate::plan::{self, GenerationMode, PlanContext};
use crate::writer;

/// Default output filename under the repository root
pub const DEFAULT_OUTPUT: &str = "task_master_plan.json";

/// Options for a single generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Repository root the plan is generated for
    pub repo_root: PathBuf,
    /// Output filename under the repository root
    pub output: String,
    /// Generation mode
    pub mode: GenerationMode,
    /// Prior plan to extend (evolve mode); an empty path counts as none
    pub baseline: Option<PathBuf>,
    /// Template file replacing the embedded blueprint
    pub blueprint: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            output: DEFAULT_OUTPUT.to_string(),
            mode: GenerationMode::Initial,
            baseline: None,
            blueprint: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<PathBuf>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }

    pub fn with_blueprint(mut self, blueprint: impl Into<PathBuf>) -> Self {
        self.blueprint = Some(blueprint.into());
        self
    }
}

/// Summary of a completed generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path the plan was written to
    pub output_path: PathBuf,
    /// Project name extracted from the architecture document
    pub project_name: String,
    /// Mode the plan was generated in
    pub mode: GenerationMode,
    /// Number of phases in the written plan
    pub phase_count: usize,
    /// Baseline that was extended, when one was found
    pub baseline: Option<PathBuf>,
    /// Last-updated date extracted from the architecture document
    pub source_last_updated: Option<String>,
}

/// Run the generation pipeline end to end
pub fn run(options: &GenerateOptions) -> PlannerResult<GenerateResult> {
    let repo_root = resolve_repo_root(&options.repo_root);

    let text = architecture::read_text_or_empty(&repo_root.join(ARCHITECTURE_FILE))?;
    let fields = architecture::extract_fields(&text);

    let blueprint = match &options.blueprint {
        Some(path) => Blueprint::from_path(path)?,
        None => Blueprint::for_mode(options.mode)?,
    };

    let baseline = match &options.baseline {
        Some(path) if !path.as_os_str().is_empty() => {
            baseline::load_baseline(&repo_root, path)?
        }
        _ => None,
    };
    let baseline_path = baseline.as_ref().map(|loaded| loaded.path.clone());

    let ctx = PlanContext {
        repo_root: repo_root.display().to_string(),
        generated_on: Local::now().format("%Y-%m-%d").to_string(),
        mode: options.mode,
    };

    let document = match baseline {
        Some(loaded) => plan::evolve_plan(loaded, &blueprint, &fields, &ctx)?,
        None => serde_json::to_value(plan::fresh_plan(&blueprint, &fields, &ctx))?,
    };

    let output_path = writer::write_plan(&repo_root, &options.output, &document)?;

    let phase_count = document
        .get("phases")
        .and_then(Value::as_array)
        .map(|phases| phases.len())
        .unwrap_or(0);

    Ok(GenerateResult {
        output_path,
        project_name: fields.project_name,
        mode: options.mode,
        phase_count,
        baseline: baseline_path,
        source_last_updated: fields.last_updated,
    })
}

/// Resolve the repository root to an absolute path.
///
/// Canonicalizes when the path exists. A nonexistent root is made absolute
/// lexically so the failure surfaces as the output write error.
fn resolve_repo_root(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        }
    }
}
