use crate::Category;

use super::{LanguageSupport, Taxonomy};

static TAXONOMY: Taxonomy = Taxonomy::new(&[
    (Category::Function, &["method", "singleton_method"]),
    (Category::Class, &["class"]),
    (Category::Module, &["module"]),
]);

#[derive(Debug)]
pub struct RubySupport;

impl LanguageSupport for RubySupport {
    fn id(&self) -> &'static str {
        "ruby"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rb"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_ruby::LANGUAGE.into()
    }

    fn taxonomy(&self) -> &Taxonomy {
        &TAXONOMY
    }
}
