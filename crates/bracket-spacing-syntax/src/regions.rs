//! Discovery of computed bracketed regions in a syntax tree.
//!
//! Member access (`obj[key]`, `obj?.[key]`) and computed property keys
//! (`{ [key]: value }`, `{ [key]() {} }`, `const { [key]: v } = obj`) are
//! collected. Computed class member names are collected only on request. Dot
//! access and plain keys never produce a region.

use bracket_spacing_core::{BoundaryTokens, Token};
use tree_sitter::Node;

use crate::position::node_span;

/// Node kinds treated as a single lexical token even though the grammar
/// gives them children.
const ATOMIC_KINDS: &[&str] = &[
    "string",
    "template_string",
    "regex",
    "number",
    "jsx_text",
];

/// Comments are not tokens of the bracketed expression and are skipped when
/// picking its first and last tokens.
const COMMENT_KINDS: &[&str] = &["comment", "html_comment"];

/// The syntactic category of a computed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Bracket member access such as `obj[key]`.
    MemberAccess,
    /// Computed key of an object literal or object pattern property.
    PropertyKey,
    /// Computed name of a class method or field.
    ClassMember,
}

/// A computed region together with its boundary tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedRegion<'src> {
    kind: RegionKind,
    tokens: BoundaryTokens<'src>,
}

impl<'src> ComputedRegion<'src> {
    /// Returns the syntactic category of the region.
    #[must_use]
    pub const fn kind(&self) -> RegionKind {
        self.kind
    }

    /// Returns the four boundary tokens of the region.
    #[must_use]
    pub const fn tokens(&self) -> &BoundaryTokens<'src> {
        &self.tokens
    }
}

/// Collects every computed region below `root` in pre-order.
///
/// Regions whose brackets are missing or empty (possible in trees with syntax
/// errors) are skipped.
#[must_use]
pub fn computed_regions<'src>(
    root: Node<'_>,
    source: &'src str,
    include_class_members: bool,
) -> Vec<ComputedRegion<'src>> {
    let mut regions = Vec::new();
    visit(root, source, include_class_members, &mut regions);
    regions
}

fn visit<'src>(
    node: Node<'_>,
    source: &'src str,
    include_class_members: bool,
    regions: &mut Vec<ComputedRegion<'src>>,
) {
    let region = classify(node)
        .filter(|kind| include_class_members || *kind != RegionKind::ClassMember)
        .and_then(|kind| {
            boundary_tokens(node, source).map(|tokens| ComputedRegion { kind, tokens })
        });
    if let Some(found) = region {
        regions.push(found);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, include_class_members, regions);
    }
}

fn classify(node: Node<'_>) -> Option<RegionKind> {
    match node.kind() {
        "subscript_expression" => Some(RegionKind::MemberAccess),
        "computed_property_name" => classify_computed_name(node),
        _ => None,
    }
}

fn classify_computed_name(node: Node<'_>) -> Option<RegionKind> {
    let parent = node.parent()?;
    match parent.kind() {
        "pair" | "pair_pattern" => Some(RegionKind::PropertyKey),
        "method_definition" => match parent.parent()?.kind() {
            "object" => Some(RegionKind::PropertyKey),
            "class_body" => Some(RegionKind::ClassMember),
            _ => None,
        },
        "public_field_definition" | "field_definition" => Some(RegionKind::ClassMember),
        _ => None,
    }
}

fn boundary_tokens<'src>(node: Node<'_>, source: &'src str) -> Option<BoundaryTokens<'src>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    let open_bracket = children.iter().copied().find(|child| child.kind() == "[")?;
    let close_bracket = children.iter().rev().copied().find(|child| child.kind() == "]")?;
    if open_bracket.is_missing() || close_bracket.is_missing() {
        return None;
    }

    let (open, close) = innermost_delimiters(open_bracket, close_bracket);
    let inner_first = next_code_sibling(open)?;
    let inner_last = prev_code_sibling(close)?;
    if inner_first.start_byte() >= close.start_byte() {
        return None;
    }

    Some(BoundaryTokens::new(
        token(open, source),
        token(leading_token(inner_first), source),
        token(trailing_token(inner_last), source),
        token(close, source),
    ))
}

/// Steps through parentheses wrapping the whole bracketed expression.
///
/// `obj[( key )]` is measured between `(` and `key`, as the parentheses are
/// not part of the key expression itself.
fn innermost_delimiters<'tree>(open: Node<'tree>, close: Node<'tree>) -> (Node<'tree>, Node<'tree>) {
    let mut delimiters = (open, close);
    while let Some(wrapped) = sole_parenthesized(delimiters.0, delimiters.1) {
        let mut cursor = wrapped.walk();
        let children: Vec<Node<'tree>> = wrapped.children(&mut cursor).collect();
        let open_paren = children.iter().copied().find(|child| child.kind() == "(");
        let close_paren = children.iter().rev().copied().find(|child| child.kind() == ")");
        match (open_paren, close_paren) {
            (Some(left), Some(right)) if !left.is_missing() && !right.is_missing() => {
                delimiters = (left, right);
            }
            _ => break,
        }
    }
    delimiters
}

fn sole_parenthesized<'tree>(open: Node<'tree>, close: Node<'tree>) -> Option<Node<'tree>> {
    let inner = next_code_sibling(open)?;
    let is_sole = prev_code_sibling(close).is_some_and(|last| last.id() == inner.id());
    (is_sole && inner.kind() == "parenthesized_expression").then_some(inner)
}

fn is_atomic(node: Node<'_>) -> bool {
    ATOMIC_KINDS.contains(&node.kind())
}

fn is_comment(node: Node<'_>) -> bool {
    COMMENT_KINDS.contains(&node.kind())
}

fn next_code_sibling(node: Node<'_>) -> Option<Node<'_>> {
    let mut sibling = node.next_sibling();
    while let Some(candidate) = sibling {
        if !is_comment(candidate) {
            return Some(candidate);
        }
        sibling = candidate.next_sibling();
    }
    None
}

fn prev_code_sibling(node: Node<'_>) -> Option<Node<'_>> {
    let mut sibling = node.prev_sibling();
    while let Some(candidate) = sibling {
        if !is_comment(candidate) {
            return Some(candidate);
        }
        sibling = candidate.prev_sibling();
    }
    None
}

/// Descends to the first lexical token of `node`, skipping comments.
fn leading_token(mut node: Node<'_>) -> Node<'_> {
    while !is_atomic(node) {
        let mut cursor = node.walk();
        let Some(child) = node.children(&mut cursor).find(|child| !is_comment(*child)) else {
            break;
        };
        node = child;
    }
    node
}

/// Descends to the last lexical token of `node`, skipping comments.
fn trailing_token(mut node: Node<'_>) -> Node<'_> {
    while !is_atomic(node) {
        let mut cursor = node.walk();
        let Some(child) = node
            .children(&mut cursor)
            .filter(|child| !is_comment(*child))
            .last()
        else {
            break;
        };
        node = child;
    }
    node
}

fn token<'src>(node: Node<'_>, source: &'src str) -> Token<'src> {
    let text = source.get(node.byte_range()).unwrap_or_default();
    Token::new(text, node_span(node, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Parser, SupportedLanguage};
    use rstest::rstest;

    fn regions_in(source: &str, include_class_members: bool) -> Vec<(RegionKind, [String; 4])> {
        let mut parser = Parser::new(SupportedLanguage::TypeScript).expect("parser init");
        let parsed = parser.parse(source).expect("parse");
        computed_regions(parsed.root_node(), source, include_class_members)
            .into_iter()
            .map(|region| {
                let tokens = region.tokens();
                (
                    region.kind(),
                    [
                        tokens.before.text().to_owned(),
                        tokens.first.text().to_owned(),
                        tokens.last.text().to_owned(),
                        tokens.after.text().to_owned(),
                    ],
                )
            })
            .collect()
    }

    fn texts(first: &str, last: &str) -> [String; 4] {
        [
            "[".to_owned(),
            first.to_owned(),
            last.to_owned(),
            "]".to_owned(),
        ]
    }

    #[rstest]
    #[case::member("obj[key];", RegionKind::MemberAccess, "key", "key")]
    #[case::optional_member("obj?.[key];", RegionKind::MemberAccess, "key", "key")]
    #[case::expression("obj[a + b];", RegionKind::MemberAccess, "a", "b")]
    #[case::call("obj[fn(x)];", RegionKind::MemberAccess, "fn", ")")]
    #[case::string("obj['a b'];", RegionKind::MemberAccess, "'a b'", "'a b'")]
    #[case::template("obj[`x${y}`];", RegionKind::MemberAccess, "`x${y}`", "`x${y}`")]
    #[case::pair("x = { [key]: 1 };", RegionKind::PropertyKey, "key", "key")]
    #[case::object_method("x = { [key]() {} };", RegionKind::PropertyKey, "key", "key")]
    #[case::pattern("const { [key]: v } = obj;", RegionKind::PropertyKey, "key", "key")]
    fn finds_single_region(
        #[case] source: &str,
        #[case] kind: RegionKind,
        #[case] first: &str,
        #[case] last: &str,
    ) {
        assert_eq!(regions_in(source, false), vec![(kind, texts(first, last))]);
    }

    #[rstest]
    #[case::block("obj[ /* a */ key /* b */ ];")]
    #[case::leading_only("obj[/* a */ key];")]
    #[case::line("obj[ key // b\n];")]
    fn comments_are_not_inner_tokens(#[case] source: &str) {
        assert_eq!(
            regions_in(source, false),
            vec![(RegionKind::MemberAccess, texts("key", "key"))]
        );
    }

    #[rstest]
    #[case::single("obj[( key )];", ["(", "key", "key", ")"])]
    #[case::nested("obj[ (( key )) ];", ["(", "key", "key", ")"])]
    #[case::property("x = { [(key)]: 1 };", ["(", "key", "key", ")"])]
    #[case::not_whole("obj[(a) + (b)];", ["[", "(", ")", "]"])]
    fn parentheses_around_the_whole_key_are_stepped_through(
        #[case] source: &str,
        #[case] expected: [&str; 4],
    ) {
        let found = regions_in(source, false);
        assert_eq!(found.len(), 1);
        let (_, tokens) = found.first().expect("one region");
        assert_eq!(tokens, &expected.map(String::from));
    }

    #[rstest]
    #[case::dot("obj.key;")]
    #[case::plain_key("x = { key: 1 };")]
    #[case::string_key("x = { 'key': 1 };")]
    #[case::array("x = [a, b];")]
    #[case::index_type("type T = U['key'];")]
    fn ignores_non_computed_forms(#[case] source: &str) {
        assert!(regions_in(source, false).is_empty());
    }

    #[test]
    fn class_members_are_opt_in() {
        let source = "class A { [m]() {} [f] = 1; }";
        assert!(regions_in(source, false).is_empty());
        let kinds: Vec<RegionKind> = regions_in(source, true)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec![RegionKind::ClassMember, RegionKind::ClassMember]);
    }

    #[test]
    fn nested_regions_are_collected_outer_first() {
        let found = regions_in("a[b[c]];", false);
        assert_eq!(
            found,
            vec![
                (RegionKind::MemberAccess, texts("b", "]")),
                (RegionKind::MemberAccess, texts("c", "c")),
            ]
        );
    }
}
