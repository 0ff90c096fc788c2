/// Top-level astdiff error type.
///
/// All fallible operations in `astdiff-core` return
/// [`Result<T, AstDiffError>`](Result). Each variant wraps a
/// domain-specific error enum, allowing callers to match on the error
/// source without losing type information.
#[derive(thiserror::Error, Debug)]
pub enum AstDiffError {
    /// Error executing git or reading repository content.
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Error assembling or writing the report.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Errors from git invocation and repository content access.
#[derive(thiserror::Error, Debug)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    /// A git command exited with a non-zero status.
    #[error("git {command} failed: {stderr}")]
    CommandFailed {
        /// The git subcommand that failed.
        command: String,
        /// Trimmed stderr from git.
        stderr: String,
    },

    /// A commit range was requested without a base reference.
    #[error("A base reference is required for commit comparison")]
    MissingBaseRef,

    /// git output was not valid UTF-8.
    #[error("git produced non-UTF-8 output: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Spawning git failed (binary missing) or a file read failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors serializing or writing the final report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem I/O error writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, AstDiffError>`.
pub type Result<T> = std::result::Result<T, AstDiffError>;
