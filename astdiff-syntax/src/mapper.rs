// Change-to-syntax mapping — find the named constructs that contain a
// set of changed lines.
//
// The tree is walked depth-first with subtree pruning: a node whose line
// range misses every changed line cannot have a descendant that hits one.
// Categorized nodes are recorded and recursion continues regardless, so a
// construct and a smaller construct nested inside it are both reported;
// the consumer decides which granularity it wants.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;
use tree_sitter::Node;

use crate::languages::{LanguageSupport, SignatureStyle};
use crate::{ANONYMOUS, Category, ChangeKind, ChangeRecord, Result, SyntaxError};

/// Child kinds that carry a construct's name, in lookup order.
const NAME_KINDS: &[&str] = &["identifier", "name", "property_identifier", "type_identifier"];

/// Raw kinds that denote a class-like enclosing construct.
const CLASS_LIKE_KINDS: &[&str] = &[
    "class_definition",
    "class_declaration",
    "class_specifier",
    "struct_specifier",
    "impl_item",
];

/// Map changed lines to the syntactic constructs that contain them.
///
/// `changed_lines` holds 1-based line numbers in `source`. Empty source
/// or an empty line set yields an empty list, not an error. Records come
/// back sorted by `line_start` (source order on ties) with
/// `change_kind` set to [`ChangeKind::Modified`]; the caller stamps the
/// per-file kind afterwards.
pub fn map_changes(
    source: &str,
    changed_lines: &BTreeSet<usize>,
    language: &dyn LanguageSupport,
) -> Result<Vec<ChangeRecord>> {
    if source.is_empty() || changed_lines.is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.tree_sitter_language())
        .map_err(|e| SyntaxError::TreeSitter(e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| SyntaxError::Parse {
        message: format!("{} parser produced no tree", language.id()),
    })?;

    let mut records = Vec::new();
    let mut seen_ranges = HashSet::new();
    visit(
        tree.root_node(),
        source,
        changed_lines,
        language,
        &mut records,
        &mut seen_ranges,
    );

    // Stable sort keeps tree visitation order on equal starts.
    records.sort_by_key(|r| r.line_start);
    debug!(
        language = language.id(),
        records = records.len(),
        "Mapped changed lines to syntax constructs"
    );
    Ok(records)
}

fn visit(
    node: Node<'_>,
    source: &str,
    changed_lines: &BTreeSet<usize>,
    language: &dyn LanguageSupport,
    records: &mut Vec<ChangeRecord>,
    seen_ranges: &mut HashSet<(usize, usize)>,
) {
    let line_start = node.start_position().row + 1;
    let line_end = node.end_position().row + 1;

    let touched_lines: Vec<usize> = changed_lines
        .range(line_start..=line_end)
        .copied()
        .collect();
    if touched_lines.is_empty() {
        // No descendant can exceed this node's line range.
        return;
    }

    if let Some(category) = language.taxonomy().categorize(node.kind()) {
        if seen_ranges.insert((line_start, line_end)) {
            records.push(build_record(
                node,
                source,
                language,
                category,
                line_start,
                line_end,
                touched_lines,
            ));
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, changed_lines, language, records, seen_ranges);
    }
}

fn build_record(
    node: Node<'_>,
    source: &str,
    language: &dyn LanguageSupport,
    category: Category,
    line_start: usize,
    line_end: usize,
    touched_lines: Vec<usize>,
) -> ChangeRecord {
    let name = node_name(node, source).unwrap_or_else(|| ANONYMOUS.to_string());
    let parent = enclosing_class_name(node, source);

    // A function nested in a named class-like construct is a method;
    // a method-shaped node with no such ancestor is a plain function.
    let category = match (category, parent.is_some()) {
        (Category::Function, true) => Category::Method,
        (Category::Method, false) => Category::Function,
        (other, _) => other,
    };

    ChangeRecord {
        category,
        name,
        line_start,
        line_end,
        change_kind: ChangeKind::Modified,
        touched_lines,
        parent,
        signature: extract_signature(node, source, language.signature_style()),
        body: source[node.byte_range()].to_string(),
    }
}

/// Resolve a construct's name from its immediate children.
///
/// Deliberately shallow: only `variable_declarator` children get one
/// extra level of search, so names from unrelated sibling constructs
/// are never picked up.
fn node_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if NAME_KINDS.contains(&child.kind()) {
            return Some(node_text(child, source).to_string());
        }
        if child.kind() == "variable_declarator" {
            let mut inner = child.walk();
            for grandchild in child.children(&mut inner) {
                if grandchild.kind() == "identifier" || grandchild.kind() == "name" {
                    return Some(node_text(grandchild, source).to_string());
                }
            }
        }
    }
    None
}

/// Walk ancestors for the nearest class-like construct with a real name.
///
/// An anonymous class-like ancestor does not stop the walk; it keeps
/// going outward until a named one or the root.
fn enclosing_class_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if CLASS_LIKE_KINDS.contains(&ancestor.kind()) {
            if let Some(name) = node_name(ancestor, source) {
                return Some(name);
            }
        }
        current = ancestor.parent();
    }
    None
}

/// Extract the construct header from its raw text.
fn extract_signature(node: Node<'_>, source: &str, style: SignatureStyle) -> String {
    let text = node_text(node, source);
    match style {
        SignatureStyle::Indentation => {
            let mut parts = Vec::new();
            for line in text.lines() {
                parts.push(line);
                if line.trim_end().ends_with(':') {
                    break;
                }
            }
            parts.join("\n")
        }
        SignatureStyle::Brace => {
            let mut lines = text.lines();
            let Some(first) = lines.next() else {
                return String::new();
            };
            if let Some((before, _)) = first.split_once('{') {
                return before.trim().to_string();
            }
            let mut parts = vec![first.to_string()];
            for line in lines {
                if let Some((before, _)) = line.split_once('{') {
                    parts.push(before.trim().to_string());
                    break;
                }
                parts.push(line.to_string());
                // Caps runaway signatures for malformed constructs.
                if parts.len() > 5 {
                    break;
                }
            }
            parts.join("\n")
        }
    }
}

fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Indices of records the containment filter would drop: a record fully
/// nested inside another whose touched lines cover all of its own.
///
/// [`map_changes`] never applies this; the full list is returned and
/// granularity is left to the consumer. Exposed for consumers that want
/// only the outermost wrappers removed.
pub fn redundant_records(records: &[ChangeRecord]) -> Vec<usize> {
    let mut redundant = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let inner: BTreeSet<usize> = record.touched_lines.iter().copied().collect();
        let contained = records.iter().enumerate().any(|(j, other)| {
            if i == j {
                return false;
            }
            let strictly_inside = other.line_start <= record.line_start
                && record.line_end <= other.line_end
                && (other.line_start < record.line_start || record.line_end < other.line_end);
            if !strictly_inside {
                return false;
            }
            let shared: BTreeSet<usize> = other
                .touched_lines
                .iter()
                .copied()
                .filter(|line| inner.contains(line))
                .collect();
            shared == inner
        });
        if contained {
            redundant.push(i);
        }
    }
    redundant
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::LanguageRegistry;

    fn lines(numbers: &[usize]) -> BTreeSet<usize> {
        numbers.iter().copied().collect()
    }

    fn map(source: &str, changed: &[usize], lang_id: &str) -> Vec<ChangeRecord> {
        let registry = LanguageRegistry::new();
        let language = registry.get(lang_id).expect("registered language");
        map_changes(source, &lines(changed), language.as_ref()).expect("mapping succeeds")
    }

    const PYTHON_FN: &str = "\
def compute_total(values):
    total = 0
    for value in values:
        total += value
    if total < 0:
        raise ValueError(total)
    return total
";

    #[test]
    fn single_line_edit_in_python_function_body() {
        let records = map(PYTHON_FN, &[4], "python");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.category, Category::Function);
        assert_eq!(record.name, "compute_total");
        assert_eq!(record.line_start, 1);
        assert_eq!(record.line_end, 7);
        assert_eq!(record.touched_lines, vec![4]);
        assert_eq!(record.signature, "def compute_total(values):");
        assert_eq!(record.parent, None);
        assert_eq!(record.change_kind, ChangeKind::Modified);
        assert!(record.body.starts_with("def compute_total"));
    }

    #[test]
    fn method_in_named_python_class_gets_parent() {
        let source = "\
class Greeter:
    def greet(self, name):
        return f\"hello {name}\"
";
        let records = map(source, &[3], "python");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Class);
        assert_eq!(records[0].name, "Greeter");
        let method = &records[1];
        assert_eq!(method.category, Category::Method);
        assert_eq!(method.name, "greet");
        assert_eq!(method.parent.as_deref(), Some("Greeter"));
    }

    #[test]
    fn method_in_rust_impl_block() {
        let source = "\
impl Counter {
    fn increment(&mut self) {
        self.count += 1;
    }
}
";
        let records = map(source, &[3], "rust");
        assert_eq!(records.len(), 2);
        let block = &records[0];
        assert_eq!(block.category, Category::Impl);
        assert_eq!(block.name, "Counter");
        assert_eq!(block.signature, "impl Counter");
        let method = &records[1];
        assert_eq!(method.category, Category::Method);
        assert_eq!(method.name, "increment");
        assert_eq!(method.parent.as_deref(), Some("Counter"));
        assert_eq!(method.signature, "fn increment(&mut self)");
    }

    #[test]
    fn method_in_brace_language_class() {
        let source = "\
class Account {
    deposit(amount) {
        this.balance += amount;
    }
}
";
        let records = map(source, &[3], "javascript");
        let method = records
            .iter()
            .find(|r| r.name == "deposit")
            .expect("deposit record");
        assert_eq!(method.category, Category::Method);
        assert_eq!(method.parent.as_deref(), Some("Account"));
        assert_eq!(method.signature, "deposit(amount)");
    }

    #[test]
    fn object_literal_method_without_class_parent_is_function() {
        let source = "\
const handlers = {
  render() {
    return 1;
  },
};
";
        let records = map(source, &[3], "javascript");
        let render = records
            .iter()
            .find(|r| r.name == "render")
            .expect("render record");
        assert_eq!(render.category, Category::Function);
        assert_eq!(render.parent, None);
    }

    #[test]
    fn anonymous_function_expression() {
        let source = "\
const handler = function () {
  return 1;
};
";
        let records = map(source, &[2], "javascript");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Function);
        assert_eq!(records[0].name, ANONYMOUS);
    }

    #[test]
    fn empty_inputs_yield_empty_sequence() {
        let registry = LanguageRegistry::new();
        let python = registry.get("python").unwrap();

        let records = map_changes("", &lines(&[1]), python.as_ref()).unwrap();
        assert!(records.is_empty());

        let records = map_changes(PYTHON_FN, &BTreeSet::new(), python.as_ref()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn untouched_subtrees_contribute_no_records() {
        let source = "\
def first():
    return 1


def second():
    return 2
";
        let records = map(source, &[6], "python");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "second");
    }

    #[test]
    fn identical_ranges_are_deduplicated() {
        // Both arrow functions span the same single line.
        let records = map("const f = () => () => 1;\n", &[1], "javascript");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Function);
    }

    #[test]
    fn mapping_is_idempotent() {
        let registry = LanguageRegistry::new();
        let python = registry.get("python").unwrap();
        let changed = lines(&[2, 4]);
        let first = map_changes(PYTHON_FN, &changed, python.as_ref()).unwrap();
        let second = map_changes(PYTHON_FN, &changed, python.as_ref()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn touched_lines_are_a_sorted_subset_of_changed_lines() {
        let source = "\
import os

class Store:
    def put(self, key, value):
        self.data[key] = value

    def get(self, key):
        return self.data.get(key)
";
        let changed = [1, 5, 8];
        let records = map(source, &changed, "python");
        assert!(!records.is_empty());
        for record in &records {
            assert!(!record.touched_lines.is_empty());
            assert!(record.touched_lines.is_sorted());
            for line in &record.touched_lines {
                assert!(changed.contains(line));
                assert!(*line >= record.line_start && *line <= record.line_end);
            }
        }
        assert!(records.iter().any(|r| r.category == Category::Import));
    }

    #[test]
    fn records_are_ordered_by_line_start() {
        let source = "\
use std::fmt;

struct Point {
    x: i32,
    y: i32,
}

fn origin() -> Point {
    Point { x: 0, y: 0 }
}
";
        let records = map(source, &[1, 4, 9], "rust");
        let starts: Vec<usize> = records.iter().map(|r| r.line_start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, Category::Import);
        assert_eq!(records[1].category, Category::Struct);
        assert_eq!(records[2].category, Category::Function);
    }

    #[test]
    fn brace_signature_spans_multiple_lines() {
        let source = "\
class Config {
    int lookup(
        String key,
        int fallback
    ) {
        return 0;
    }
}
";
        let records = map(source, &[6], "java");
        let method = records
            .iter()
            .find(|r| r.name == "lookup")
            .expect("lookup record");
        assert_eq!(method.category, Category::Method);
        // Node text starts at the construct's first token, so the first
        // signature line carries no leading indentation.
        assert_eq!(
            method.signature,
            "int lookup(\n        String key,\n        int fallback\n)"
        );
    }

    #[test]
    fn brace_signature_is_capped_at_six_lines() {
        let source = "\
class Wide {
    int configure(int a,
        int b,
        int c,
        int d,
        int e,
        int f,
        int g)
    {
        return 0;
    }
}
";
        let records = map(source, &[10], "java");
        let method = records
            .iter()
            .find(|r| r.name == "configure")
            .expect("configure record");
        // The opening brace sits past the cap, so accumulation stops early.
        assert_eq!(method.signature.lines().count(), 6);
        assert!(!method.signature.contains('{'));
    }

    #[test]
    fn containment_filter_is_computed_but_not_applied() {
        let source = "\
class Greeter:
    def greet(self, name):
        return f\"hello {name}\"
";
        let records = map(source, &[3], "python");
        assert_eq!(records.len(), 2, "nested matches are all returned");

        let redundant = redundant_records(&records);
        // The method's touched lines are covered by the class wrapper,
        // so the filter would drop the inner record.
        assert_eq!(redundant, vec![1]);
    }

    #[test]
    fn no_record_shares_a_line_range() {
        let source = "\
mod outer {
    fn a() {}
    fn b() {}
}
";
        let records = map(source, &[2, 3], "rust");
        let mut ranges: Vec<(usize, usize)> =
            records.iter().map(|r| (r.line_start, r.line_end)).collect();
        let before = ranges.len();
        ranges.sort_unstable();
        ranges.dedup();
        assert_eq!(ranges.len(), before);
    }

    #[test]
    fn go_method_without_class_ancestor_reports_function() {
        let source = "\
package main

func (c *Counter) Increment() {
\tc.count++
}
";
        let records = map(source, &[4], "go");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        // Go receivers have no class-like ancestor node, so the
        // method-shaped declaration degrades to a function. The name
        // lives in a field_identifier the shallow search does not
        // cover, so it stays anonymous.
        assert_eq!(record.category, Category::Function);
        assert_eq!(record.parent, None);
        assert_eq!(record.name, ANONYMOUS);
    }
}
