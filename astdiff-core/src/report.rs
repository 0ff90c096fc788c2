// Report types — the JSON the tool emits for its automated consumer.
//
// Absent optional values serialize as explicit `null` so a reader can
// tell "unknown" apart from "not in the schema".

use std::path::Path;

use astdiff_syntax::ChangeRecord;
use serde::{Deserialize, Serialize};

use crate::diff::FileStatus;
use crate::error::{ReportError, Result};
use crate::git::DiffMode;

/// One entry per changed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    /// Detected language id, or `null` when the extension is not
    /// recognized. Detection does not require a registered grammar.
    pub language: Option<String>,
    pub status: FileStatus,
    pub added_lines: Vec<usize>,
    pub deleted_lines: Vec<usize>,
    pub changes: Vec<ChangeRecord>,
}

/// The full structural change report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub diff_type: DiffMode,
    pub base_ref: Option<String>,
    pub target_ref: Option<String>,
    pub files: Vec<FileReport>,
}

impl DiffReport {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).map_err(ReportError::Serialization)?;
        Ok(json)
    }

    /// Write the JSON report to a file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(ReportError::Io)?;
        Ok(())
    }
}
