use crate::Category;

use super::{LanguageSupport, SignatureStyle, Taxonomy};

// Methods are not listed here: a function_definition nested in a named
// class is re-labeled during mapping.
static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (Category::Function, &["function_definition"]),
    (Category::Class, &["class_definition"]),
    (
        Category::Import,
        &["import_statement", "import_from_statement"],
    ),
]);

#[derive(Debug)]
pub struct PythonSupport;

impl LanguageSupport for PythonSupport {
    fn id(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }

    fn signature_style(&self) -> SignatureStyle {
        SignatureStyle::Indentation
    }
}
