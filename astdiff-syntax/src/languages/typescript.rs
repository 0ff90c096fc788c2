use crate::Category;

use super::{LanguageSupport, Taxonomy};

static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (
        Category::Function,
        &["function_declaration", "arrow_function", "function_expression"],
    ),
    (Category::Class, &["class_declaration"]),
    (Category::Method, &["method_definition"]),
    (Category::Import, &["import_statement"]),
    (Category::Interface, &["interface_declaration"]),
    (Category::Type, &["type_alias_declaration"]),
]);

#[derive(Debug)]
pub struct TypeScriptSupport;

impl LanguageSupport for TypeScriptSupport {
    fn id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ts"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}

/// TSX shares the TypeScript taxonomy but parses with the TSX grammar.
#[derive(Debug)]
pub struct TsxSupport;

impl LanguageSupport for TsxSupport {
    fn id(&self) -> &'static str {
        "tsx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tsx"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
