// Unified-diff decoding — turn raw `git diff` text into per-file
// changed-line sets.
//
// Added lines are numbered in the target (new) file, deleted lines in
// the source (old) file. Hunk headers carry the starting counters; the
// hunk body advances them.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Status of a file in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Deleted,
    Modified,
}

/// Changes to a single file, decoded from the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Lines added, numbered in the new version of the file.
    pub added_lines: BTreeSet<usize>,
    /// Lines deleted, numbered in the old version of the file.
    pub deleted_lines: BTreeSet<usize>,
}

impl FileChange {
    fn new() -> Self {
        Self {
            path: PathBuf::new(),
            status: FileStatus::Modified,
            added_lines: BTreeSet::new(),
            deleted_lines: BTreeSet::new(),
        }
    }
}

/// Decode unified diff text into per-file change sets.
///
/// Empty or whitespace-only input yields an empty list.
pub fn parse_diff(diff_text: &str) -> Vec<FileChange> {
    let mut changes: Vec<FileChange> = Vec::new();
    let mut current: Option<FileChange> = None;
    let mut old_path: Option<PathBuf> = None;
    let mut in_hunk = false;
    let mut old_line = 0usize;
    let mut new_line = 0usize;

    for line in diff_text.lines() {
        if line.starts_with("diff --git ") {
            if let Some(file) = current.take() {
                changes.push(file);
            }
            current = Some(FileChange::new());
            old_path = None;
            in_hunk = false;
            continue;
        }

        let Some(file) = current.as_mut() else {
            continue;
        };

        if let Some((old_start, new_start)) = parse_hunk_header(line) {
            old_line = old_start;
            new_line = new_start;
            in_hunk = true;
            continue;
        }

        if in_hunk {
            match line.bytes().next() {
                Some(b'+') => {
                    file.added_lines.insert(new_line);
                    new_line += 1;
                }
                Some(b'-') => {
                    file.deleted_lines.insert(old_line);
                    old_line += 1;
                }
                Some(b'\\') => {} // "\ No newline at end of file"
                _ => {
                    old_line += 1;
                    new_line += 1;
                }
            }
            continue;
        }

        // Header lines between "diff --git" and the first hunk.
        if line.starts_with("new file mode ") {
            file.status = FileStatus::Added;
        } else if line.starts_with("deleted file mode ") {
            file.status = FileStatus::Deleted;
        } else if let Some(rest) = line.strip_prefix("--- ") {
            if rest != "/dev/null" {
                old_path = Some(strip_diff_prefix(rest, "a/"));
            }
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            if rest == "/dev/null" {
                // Deleted file: the only usable path is the source one.
                if let Some(p) = old_path.take() {
                    file.path = p;
                }
            } else {
                file.path = strip_diff_prefix(rest, "b/");
            }
        }
    }

    if let Some(file) = current {
        changes.push(file);
    }

    changes
}

/// Parse `@@ -oldStart[,count] +newStart[,count] @@ …` into the two
/// starting line counters.
fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let rest = line.strip_prefix("@@ -")?;
    let (ranges, _) = rest.split_once(" @@")?;
    let (old, new) = ranges.split_once(" +")?;
    let old_start = old.split(',').next()?.parse().ok()?;
    let new_start = new.split(',').next()?.parse().ok()?;
    Some((old_start, new_start))
}

fn strip_diff_prefix(path: &str, prefix: &str) -> PathBuf {
    PathBuf::from(path.strip_prefix(prefix).unwrap_or(path))
}
