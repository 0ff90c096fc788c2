// Git invocation — diff execution and file content retrieval.
//
// Shells out to the `git` CLI rather than linking a git library: the
// tool needs exactly the unified diff text git already produces, and
// `git show` covers content-at-revision.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GitError;

/// Comparison mode for the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Staged changes (`git diff --cached`). The default.
    Staged,
    /// Unstaged working-tree changes (`git diff`).
    Working,
    /// Explicit revision range (`git diff <from> [<to>]`).
    Commits,
}

/// Result of a git diff invocation.
#[derive(Debug, Clone)]
pub struct DiffOutput {
    pub mode: DiffMode,
    pub base_ref: Option<String>,
    pub target_ref: Option<String>,
    /// Raw unified diff text. Empty means "nothing to do", not an error.
    pub text: String,
    pub repo_root: PathBuf,
}

/// Root directory of the repository containing the current directory.
pub fn repo_root() -> Result<PathBuf, GitError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::NotARepository(stderr));
    }
    let stdout = String::from_utf8(output.stdout)?;
    Ok(PathBuf::from(stdout.trim()))
}

/// Execute git diff for the given mode and return the raw diff text
/// plus resolved reference labels.
pub fn run_diff(
    mode: DiffMode,
    from_ref: Option<&str>,
    to_ref: Option<&str>,
) -> Result<DiffOutput, GitError> {
    let mut args: Vec<&str> = vec!["diff"];
    let (base_ref, target_ref) = match mode {
        DiffMode::Staged => {
            args.push("--cached");
            (Some("HEAD".to_string()), None)
        }
        DiffMode::Working => (Some("HEAD".to_string()), None),
        DiffMode::Commits => {
            let from = from_ref.ok_or(GitError::MissingBaseRef)?;
            args.push(from);
            if let Some(to) = to_ref {
                args.push(to);
            }
            (Some(from.to_string()), to_ref.map(str::to_string))
        }
    };

    debug!(?mode, ?base_ref, ?target_ref, "Running git diff");
    let root = repo_root()?;
    let output = Command::new("git").args(&args).current_dir(&root).output()?;
    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(DiffOutput {
        mode,
        base_ref,
        target_ref,
        text: String::from_utf8(output.stdout)?,
        repo_root: root,
    })
}

/// Read a file's content from the working tree, or from a revision via
/// `git show`. Returns `Ok(None)` when the file does not exist there.
pub fn file_content(
    repo_root: &Path,
    path: &Path,
    revision: Option<&str>,
) -> Result<Option<String>, GitError> {
    match revision {
        None => {
            let full = repo_root.join(path);
            if !full.exists() {
                return Ok(None);
            }
            Ok(Some(std::fs::read_to_string(full)?))
        }
        Some(rev) => {
            let spec = format!("{rev}:{}", path.display());
            let output = Command::new("git")
                .args(["show", &spec])
                .current_dir(repo_root)
                .output()?;
            if !output.status.success() {
                return Ok(None);
            }
            Ok(Some(String::from_utf8(output.stdout)?))
        }
    }
}
