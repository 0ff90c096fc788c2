pub mod diff;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod report;

pub use diff::{FileChange, FileStatus, parse_diff};
pub use error::{AstDiffError, GitError, ReportError, Result};
pub use git::{DiffMode, DiffOutput};
pub use pipeline::generate_report;
pub use report::{DiffReport, FileReport};
