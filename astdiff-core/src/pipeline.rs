// Pipeline — run the diff, decode it, map each file's changed lines to
// syntax, assemble the report.
//
// Per-file problems (unsupported language, parse failure, unreadable
// content) degrade that file to an empty change list; only
// environment-level failures abort the run.

use std::path::Path;

use astdiff_syntax::{ChangeKind, LanguageRegistry, detect_language, map_changes};
use tracing::{debug, warn};

use crate::diff::{FileChange, FileStatus, parse_diff};
use crate::error::Result;
use crate::git::{self, DiffMode};
use crate::report::{DiffReport, FileReport};

/// Generate a structural change report for the requested comparison.
///
/// Returns `Ok(None)` when the diff is empty — a "nothing to do"
/// outcome, not an error.
pub fn generate_report(
    mode: DiffMode,
    from_ref: Option<&str>,
    to_ref: Option<&str>,
    registry: &LanguageRegistry,
) -> Result<Option<DiffReport>> {
    let diff = git::run_diff(mode, from_ref, to_ref)?;
    if diff.text.trim().is_empty() {
        return Ok(None);
    }

    let file_changes = parse_diff(&diff.text);
    if file_changes.is_empty() {
        return Ok(None);
    }

    let files = file_changes
        .into_iter()
        .map(|change| process_file(&diff.repo_root, change, registry))
        .collect();

    Ok(Some(DiffReport {
        diff_type: diff.mode,
        base_ref: diff.base_ref,
        target_ref: diff.target_ref,
        files,
    }))
}

/// Map one file's changes, degrading to an empty change list on any
/// per-file problem.
fn process_file(repo_root: &Path, change: FileChange, registry: &LanguageRegistry) -> FileReport {
    // Language detection names more languages than the registry can
    // parse; files with a known language but no grammar are reported
    // by name with an empty change list.
    let language = detect_language(&change.path).map(str::to_string);
    let support = registry.for_file(&change.path);

    let mut records = Vec::new();
    if change.status != FileStatus::Deleted {
        if let Some(support) = support {
            match git::file_content(repo_root, &change.path, None) {
                Ok(Some(source)) => {
                    match map_changes(&source, &change.added_lines, support.as_ref()) {
                        Ok(mapped) => records = mapped,
                        Err(e) => warn!(
                            path = %change.path.display(),
                            error = %e,
                            "Structural mapping failed; reporting without changes"
                        ),
                    }
                }
                Ok(None) => debug!(
                    path = %change.path.display(),
                    "File missing from working tree; skipping structural mapping"
                ),
                Err(e) => warn!(
                    path = %change.path.display(),
                    error = %e,
                    "Cannot read file content; reporting without changes"
                ),
            }
        } else {
            debug!(
                path = %change.path.display(),
                "No grammar registered; skipping structural mapping"
            );
        }
    }

    // Change kind follows file status, never individual nodes.
    let kind = if change.status == FileStatus::Added {
        ChangeKind::Added
    } else {
        ChangeKind::Modified
    };
    for record in &mut records {
        record.change_kind = kind;
    }

    FileReport {
        path: change.path.display().to_string(),
        language,
        status: change.status,
        added_lines: change.added_lines.into_iter().collect(),
        deleted_lines: change.deleted_lines.into_iter().collect(),
        changes: records,
    }
}
