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
]);

#[derive(Debug)]
pub struct JavaScriptSupport;

impl LanguageSupport for JavaScriptSupport {
    fn id(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "jsx", "mjs", "cjs"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
