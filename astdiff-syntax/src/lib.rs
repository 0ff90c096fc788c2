pub mod languages;
pub mod mapper;

use serde::{Deserialize, Serialize};

pub use languages::{LanguageRegistry, LanguageSupport, SignatureStyle, Taxonomy, detect_language};
pub use mapper::{map_changes, redundant_records};

/// Sentinel name for constructs with no resolvable identifier.
pub const ANONYMOUS: &str = "<anonymous>";

/// Error type for the syntax engine.
#[derive(thiserror::Error, Debug)]
pub enum SyntaxError {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

// ── Construct categories ───────────────────────────────────────────

/// Abstract category a raw tree-sitter node kind maps to.
///
/// This is a label for the consumer, not the grammar's node type. The
/// per-language [`Taxonomy`] tables decide which raw kinds land in
/// which category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Function,
    Method,
    Class,
    Struct,
    Enum,
    Interface,
    Trait,
    Impl,
    Import,
    Type,
    Module,
}

// ── Change kind ────────────────────────────────────────────────────

/// Whether the file containing a construct is new or edited.
///
/// Always stamped per file by the caller, never decided per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
}

// ── Change record ──────────────────────────────────────────────────

/// A syntactic construct that contains changed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub category: Category,
    /// Construct identifier, or [`ANONYMOUS`] when none resolves.
    pub name: String,
    /// 1-based inclusive line range in the current file text.
    pub line_start: usize,
    pub line_end: usize,
    pub change_kind: ChangeKind,
    /// Changed lines that fall inside this construct, ascending.
    pub touched_lines: Vec<usize>,
    /// Name of the nearest named enclosing class-like construct.
    pub parent: Option<String>,
    /// Best-effort textual header of the construct.
    pub signature: String,
    /// Full source text of the construct.
    pub body: String,
}
