//! Task Master Planner - blueprint-driven task plan generation
//!
//! The planner reads a repository's `ProjectArchitecture.md`, merges the
//! extracted metadata with a JSON blueprint template, and writes a
//! `task_master_plan.json` the repository's tooling can act on. Evolve mode
//! appends the evolution blueprint's phases onto a previously generated
//! plan without discarding anything the plan already carried.

pub mod architecture;
pub mod baseline;
pub mod blueprint;
pub mod error;
pub mod generate;
pub mod output;
pub mod plan;
pub mod writer;

// Re-exports for convenience
pub use architecture::{
    extract_fields, extract_last_updated, extract_project_name, read_text_or_empty,
    ArchitectureFields, ARCHITECTURE_FILE, UNKNOWN_PROJECT,
};
pub use baseline::{load_baseline, resolve_baseline_path, LoadedBaseline};
pub use blueprint::Blueprint;
pub use error::{PlannerError, PlannerResult};
pub use generate::{run, GenerateOptions, GenerateResult, DEFAULT_OUTPUT};
pub use plan::{
    evolve_plan, fresh_plan, GenerationMode, PlanContext, PlanDocument, ProjectSection,
    GENERATED_BY,
};
pub use writer::{render_plan, write_plan};
