//! Task Master Planner CLI - blueprint-driven task plan generator
//!
//! Usage: task-master-planner <REPO_ROOT> [OPTIONS]
//!
//! Reads `ProjectArchitecture.md` from the repository root, merges the
//! extracted metadata with a blueprint template, and writes the plan JSON
//! back into the repository.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use task_master_planner::generate::{self, GenerateOptions, DEFAULT_OUTPUT};
use task_master_planner::output::Icons;
use task_master_planner::plan::GenerationMode;

/// Task Master Planner - blueprint-driven task plan generator
#[derive(Parser, Debug)]
#[command(name = "task-master-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the repository root
    repo_root: PathBuf,

    /// Output JSON filename under the repository root
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Plan generation mode
    #[arg(long, value_enum, default_value_t = GenerationMode::Initial)]
    mode: GenerationMode,

    /// Existing plan to extend; relative paths resolve against the repository root
    #[arg(long, default_value = "")]
    baseline: String,

    /// Custom blueprint template replacing the embedded one
    #[arg(long, value_name = "PATH")]
    blueprint: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd_generate(&cli)
}

fn cmd_generate(cli: &Cli) -> Result<()> {
    let icons = Icons::detect();

    if !cli.json {
        println!("{} Task Master Planner", icons.info);
        println!("Repo: {}", cli.repo_root.display());
        println!("Mode: {}", cli.mode);
        if !cli.baseline.is_empty() {
            println!("Baseline: {}", cli.baseline);
        }
        if cli.verbose > 0 {
            if let Some(blueprint) = &cli.blueprint {
                println!("Blueprint: {}", blueprint.display());
            }
            println!("Output: {}", cli.output);
        }
    }

    let mut options = GenerateOptions::new(&cli.repo_root)
        .with_output(&cli.output)
        .with_mode(cli.mode);
    if !cli.baseline.is_empty() {
        options = options.with_baseline(&cli.baseline);
    }
    if let Some(blueprint) = &cli.blueprint {
        options = options.with_blueprint(blueprint);
    }

    let result = generate::run(&options)
        .with_context(|| format!("failed to generate plan for {}", cli.repo_root.display()))?;

    if cli.json {
        let event = serde_json::json!({
            "event": "generate",
            "status": "success",
            "output": result.output_path.display().to_string(),
            "project": result.project_name,
            "mode": result.mode.as_str(),
            "phases": result.phase_count,
            "baseline": result.baseline.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        if cli.verbose > 0 {
            println!("\nProject: {}", result.project_name);
            match &result.source_last_updated {
                Some(date) => println!("Source last updated: {}", date),
                None => println!("Source last updated: (not recorded)"),
            }
        }
        if let Some(baseline) = &result.baseline {
            println!("{} Extended baseline: {}", icons.arrow, baseline.display());
        }
        println!(
            "{} Wrote {} ({} phases)",
            icons.success,
            result.output_path.display(),
            result.phase_count
        );
    }

    Ok(())
}
