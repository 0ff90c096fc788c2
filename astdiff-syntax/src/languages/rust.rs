use crate::Category;

use super::{LanguageSupport, Taxonomy};

static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (Category::Function, &["function_item"]),
    (Category::Struct, &["struct_item"]),
    (Category::Enum, &["enum_item"]),
    (Category::Impl, &["impl_item"]),
    (Category::Trait, &["trait_item"]),
    (Category::Import, &["use_declaration"]),
]);

#[derive(Debug)]
pub struct RustSupport;

impl LanguageSupport for RustSupport {
    fn id(&self) -> &'static str {
        "rust"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
