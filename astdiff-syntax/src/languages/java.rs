use crate::Category;

use super::{LanguageSupport, Taxonomy};

static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (Category::Function, &["method_declaration"]),
    (Category::Class, &["class_declaration"]),
    (Category::Interface, &["interface_declaration"]),
    (Category::Import, &["import_declaration"]),
]);

#[derive(Debug)]
pub struct JavaSupport;

impl LanguageSupport for JavaSupport {
    fn id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
