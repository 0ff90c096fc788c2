use crate::Category;

use super::{LanguageSupport, Taxonomy};

// type_declaration covers both struct and interface types; the scan
// order makes struct the reported category.
static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (Category::Function, &["function_declaration"]),
    (Category::Method, &["method_declaration"]),
    (Category::Struct, &["type_declaration"]),
    (Category::Interface, &["type_declaration"]),
    (Category::Import, &["import_declaration"]),
]);

#[derive(Debug)]
pub struct GoSupport;

impl LanguageSupport for GoSupport {
    fn id(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
