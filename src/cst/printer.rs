//! Tree rendering helpers.
//!
//! The S-expression form prints named nodes with their field roles and is
//! what the test suite asserts against; the pretty form is for debugging.

use std::fmt::Write;

use super::node::{Node, NodeKind};

/// Render a node as a compact S-expression of named nodes.
///
/// Anonymous token leaves are omitted; placeholders and list slots are
/// kept so uniform shape is visible in the output.
pub fn to_sexp(node: &Node) -> String {
    let mut out = String::new();
    write_sexp(node, &mut out);
    out
}

fn write_sexp(node: &Node, out: &mut String) {
    if let Some(role) = node.role {
        let _ = write!(out, "{}: ", role.as_str());
    }
    let _ = write!(out, "({}", node.kind.name());
    for child in &node.children {
        if child.kind == NodeKind::Token {
            continue;
        }
        out.push(' ');
        write_sexp(child, out);
    }
    out.push(')');
}

/// Render an indented multi-line view of the tree, one node per line,
/// with spans. Token leaves show their text.
pub fn pretty(node: &Node) -> String {
    let mut out = String::new();
    write_pretty(node, 0, &mut out);
    out
}

fn write_pretty(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    if let Some(role) = node.role {
        let _ = write!(out, "{}: ", role.as_str());
    }
    let _ = write!(out, "{}", node.kind.name());
    if node.is_leaf() {
        let _ = write!(out, " {:?}", node.text);
    }
    let _ = writeln!(out, " @ {}", node.span);
    for child in &node.children {
        write_pretty(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_sexp_shows_roles_and_hides_tokens() {
        let tree = parse("x = 1;").expect("parse");
        let sexp = to_sexp(&tree.root);
        assert!(sexp.contains("(expression_statement"));
        assert!(sexp.contains("left: (identifier)"));
        assert!(sexp.contains("right: (decimal_integer_literal)"));
        assert!(!sexp.contains("(token"));
    }

    #[test]
    fn test_sexp_keeps_placeholders_visible() {
        let tree = parse("if (a) f();").expect("parse");
        let sexp = to_sexp(&tree.root);
        assert!(sexp.contains("else_clause_optional: (placeholder)"));
    }

    #[test]
    fn test_pretty_is_line_per_node() {
        let tree = parse("x;").expect("parse");
        let text = pretty(&tree.root);
        assert!(text.lines().count() >= 3);
        assert!(text.starts_with("program"));
    }
}
