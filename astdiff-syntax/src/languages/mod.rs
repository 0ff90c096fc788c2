pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod typescript;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::Category;

/// Per-language table mapping raw tree-sitter node kinds to categories.
///
/// Lookup is a linear scan over `(category, kinds)` pairs; the tables
/// are tiny and insertion order decides ties, so the first category
/// listing a kind wins.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    entries: &'static [(Category, &'static [&'static str])],
}

impl Taxonomy {
    pub const fn new(entries: &'static [(Category, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// The "no categories known" table. Kept as an explicit value so the
    /// fallback configuration is visible and testable rather than an
    /// implicit absence.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categorize a raw node kind, or `None` for uncategorized kinds.
    pub fn categorize(&self, raw_kind: &str) -> Option<Category> {
        self.entries
            .iter()
            .find(|(_, kinds)| kinds.contains(&raw_kind))
            .map(|(category, _)| *category)
    }
}

/// How a language delimits construct headers, for signature extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    /// Header ends at the first line whose trimmed text ends with `:`.
    Indentation,
    /// Header ends at the first `{`, capped at 5 accumulated lines.
    Brace,
}

/// Trait implemented by each language's syntax support.
pub trait LanguageSupport: Send + Sync + std::fmt::Debug {
    /// Language identifier (e.g., "rust", "python").
    fn id(&self) -> &'static str;

    /// File extensions this language handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Node-kind taxonomy for this language.
    fn taxonomy(&self) -> &Taxonomy;

    /// Header delimiter style for signature extraction.
    fn signature_style(&self) -> SignatureStyle {
        SignatureStyle::Brace
    }
}

static EMPTY_TAXONOMY: Taxonomy = Taxonomy::empty();

/// Extension-to-language detection table.
///
/// Detection is wider than parser support on purpose: a file whose
/// language is known but has no registered grammar is still reported
/// under its language name, with an empty change list.
static EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "python"),
    ("pyi", "python"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "tsx"),
    ("go", "go"),
    ("rs", "rust"),
    ("java", "java"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("hxx", "cpp"),
    ("rb", "ruby"),
    ("php", "php"),
    ("cs", "c_sharp"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("swift", "swift"),
    ("scala", "scala"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("html", "html"),
    ("htm", "html"),
    ("css", "css"),
    ("sql", "sql"),
    ("md", "markdown"),
    ("lua", "lua"),
    ("ex", "elixir"),
    ("exs", "elixir"),
    ("hs", "haskell"),
    ("ml", "ocaml"),
    ("mli", "ocaml"),
];

/// Identify a file's language by extension.
///
/// Covers every language the tool can name, not just the ones with a
/// registered [`LanguageSupport`]. For registered languages the id here
/// matches the registry's id.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_LANGUAGES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, id)| *id)
}

/// Registry of all supported languages.
///
/// Adding a language is a registry entry: implement [`LanguageSupport`]
/// and register it in [`LanguageRegistry::new`].
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<dyn LanguageSupport>>,
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut reg = Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        };
        reg.register(Arc::new(rust::RustSupport));
        reg.register(Arc::new(python::PythonSupport));
        reg.register(Arc::new(typescript::TypeScriptSupport));
        reg.register(Arc::new(typescript::TsxSupport));
        reg.register(Arc::new(javascript::JavaScriptSupport));
        reg.register(Arc::new(go::GoSupport));
        reg.register(Arc::new(java::JavaSupport));
        reg.register(Arc::new(ruby::RubySupport));
        reg
    }

    fn register(&mut self, lang: Arc<dyn LanguageSupport>) {
        for ext in lang.extensions() {
            self.extension_map
                .insert((*ext).to_string(), lang.id().to_string());
        }
        self.languages.insert(lang.id().to_string(), lang);
    }

    /// Look up the language support for a file by its extension.
    pub fn for_file(&self, path: &Path) -> Option<Arc<dyn LanguageSupport>> {
        let ext = path.extension()?.to_str()?;
        let lang_id = self.extension_map.get(&ext.to_lowercase())?;
        self.languages.get(lang_id).cloned()
    }

    /// Get a language by its identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn LanguageSupport>> {
        self.languages.get(id).cloned()
    }

    /// Taxonomy for a language id, or the explicit empty fallback when
    /// the language is unknown.
    pub fn taxonomy_for(&self, id: &str) -> &Taxonomy {
        self.languages
            .get(id)
            .map_or(&EMPTY_TAXONOMY, |lang| lang.taxonomy())
    }

    /// List all registered language IDs.
    pub fn language_ids(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn resolves_language_by_extension() {
        let reg = LanguageRegistry::new();
        let lang = reg.for_file(Path::new("src/app.py")).expect("python");
        assert_eq!(lang.id(), "python");
        assert_eq!(lang.signature_style(), SignatureStyle::Indentation);

        let lang = reg.for_file(Path::new("lib/util.mjs")).expect("javascript");
        assert_eq!(lang.id(), "javascript");
    }

    #[test]
    fn tsx_is_distinct_from_typescript() {
        let reg = LanguageRegistry::new();
        assert_eq!(reg.for_file(Path::new("a.ts")).unwrap().id(), "typescript");
        assert_eq!(reg.for_file(Path::new("a.tsx")).unwrap().id(), "tsx");
    }

    #[test]
    fn unknown_extension_has_no_support() {
        let reg = LanguageRegistry::new();
        assert!(reg.for_file(Path::new("notes.txt")).is_none());
        assert!(reg.for_file(Path::new("Makefile")).is_none());
    }

    #[test]
    fn detection_is_wider_than_parser_support() {
        let reg = LanguageRegistry::new();

        // Known language, no registered grammar.
        assert_eq!(detect_language(Path::new("src/main.c")), Some("c"));
        assert_eq!(detect_language(Path::new("Widget.kt")), Some("kotlin"));
        assert_eq!(detect_language(Path::new("ci.yml")), Some("yaml"));
        assert!(reg.for_file(Path::new("src/main.c")).is_none());

        // Registered languages detect under the same id.
        assert_eq!(detect_language(Path::new("app.py")), Some("python"));
        assert_eq!(detect_language(Path::new("a.tsx")), Some("tsx"));

        // Unknown extensions stay unknown.
        assert_eq!(detect_language(Path::new("notes.txt")), None);
        assert_eq!(detect_language(Path::new("Makefile")), None);
    }

    #[test]
    fn registry_lists_every_registered_id() {
        let reg = LanguageRegistry::new();
        let mut ids = reg.language_ids();
        ids.sort_unstable();
        assert_eq!(
            ids,
            ["go", "java", "javascript", "python", "ruby", "rust", "tsx", "typescript"]
        );
    }

    #[test]
    fn unknown_language_falls_back_to_empty_taxonomy() {
        let reg = LanguageRegistry::new();
        let taxonomy = reg.taxonomy_for("cobol");
        assert!(taxonomy.is_empty());
        assert_eq!(taxonomy.categorize("function_definition"), None);
    }

    #[test]
    fn taxonomy_first_category_wins_on_shared_kind() {
        // Go lists type_declaration under both struct and interface;
        // the linear scan must return the first entry.
        let reg = LanguageRegistry::new();
        let go = reg.get("go").expect("go support");
        assert_eq!(
            go.taxonomy().categorize("type_declaration"),
            Some(Category::Struct)
        );
    }
}
