//! Architecture document reading and field extraction
//!
//! The planner reads `ProjectArchitecture.md` from the repository root and
//! pulls two fields out of it: the project name (first top-level markdown
//! heading) and the value of the `| Last Updated | ... |` table row. Both
//! extractions are single-pass line scans; a missing document yields the
//! defaults rather than an error.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::PlannerResult;

/// Document the planner looks for at the repository root
pub const ARCHITECTURE_FILE: &str = "ProjectArchitecture.md";

/// Fallback project name when no top-level heading exists
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Label cell that marks the last-updated table row
const LAST_UPDATED_LABEL: &str = "Last Updated";

/// Fields extracted from the architecture document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureFields {
    /// First `# ` heading, trimmed, or "Unknown Project"
    pub project_name: String,
    /// Trimmed `| Last Updated | ... |` value, if the row exists
    pub last_updated: Option<String>,
}

/// Read a document, tolerating absence.
///
/// A missing file yields an empty string. Any other failure (permissions,
/// invalid UTF-8) propagates.
pub fn read_text_or_empty(path: &Path) -> PlannerResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

/// Extract both architecture fields from document text
pub fn extract_fields(text: &str) -> ArchitectureFields {
    ArchitectureFields {
        project_name: extract_project_name(text),
        last_updated: extract_last_updated(text),
    }
}

/// Extract the project name from the first top-level heading.
///
/// A heading line starts with `#` in column zero followed by at least one
/// space or tab and some text. Subheadings (`##`) and indented hashes do
/// not count. Returns [`UNKNOWN_PROJECT`] when no heading matches.
pub fn extract_project_name(text: &str) -> String {
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('#') {
            if rest.starts_with(' ') || rest.starts_with('\t') {
                let name = rest.trim();
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }
    UNKNOWN_PROJECT.to_string()
}

/// Extract the value cell of the first `| Last Updated | <value> |` row.
///
/// The label cell must trim to exactly "Last Updated" and both label and
/// value cells must be closed by a pipe on the same line. Returns `None`
/// when no row matches, or when the first matching value trims to empty.
pub fn extract_last_updated(text: &str) -> Option<String> {
    for line in text.lines() {
        let cells: Vec<&str> = line.split('|').collect();
        let n = cells.len();
        // `| label | value |` splits into at least four segments
        if n < 4 {
            continue;
        }
        for i in 1..n - 2 {
            if cells[i].trim() == LAST_UPDATED_LABEL && !cells[i + 1].is_empty() {
                let value = cells[i + 1].trim();
                if value.is_empty() {
                    return None;
                }
                return Some(value.to_string());
            }
        }
    }
    None
}
