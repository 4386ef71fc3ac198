//! Converts a borrowed `tree_sitter::Tree` into an owned [`codeloom_core::Ast`] arena.

use std::collections::HashMap;

use codeloom_core::{Ast, AstNode, NodeId, Position};
use tree_sitter::{Node, Tree};

/// Only named nodes (grammar productions) are kept; anonymous tokens (punctuation,
/// keywords represented as literal strings) add noise without adding rule-matchable
/// structure, and every built-in rule matches on named node kinds.
///
/// Iterative rather than recursive: a hand-written or machine-generated source can nest
/// expressions (array/object literals, binary expressions) far deeper than the call
/// stack wants to follow, and this runs over untrusted input.
pub fn build_ast(tree: &Tree, source: &[u8]) -> Ast {
    let mut ast = Ast::new();
    let mut children_of: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    let mut stack: Vec<(Node<'_>, Option<NodeId>)> = vec![(tree.root_node(), None)];
    let mut root_id = None;

    while let Some((node, parent)) = stack.pop() {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source).ok())
            .map(str::to_string);

        let id = ast.push(AstNode {
            kind: node.kind().to_string(),
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_pos: to_position(node.start_position()),
            end_pos: to_position(node.end_position()),
            children: Vec::new(),
            parent,
            name,
        });

        if let Some(parent_id) = parent {
            children_of.entry(parent_id).or_default().push(id);
        } else {
            root_id = Some(id);
        }

        for i in (0..node.named_child_count()).rev() {
            if let Some(child) = node.named_child(i) {
                stack.push((child, Some(id)));
            }
        }
    }

    for (parent_id, children) in children_of {
        ast.set_children(parent_id, children);
    }
    ast.set_root(root_id.expect("tree always has a root node"));
    ast
}

fn to_position(point: tree_sitter::Point) -> Position {
    Position {
        row: point.row,
        column: point.column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ts_language;
    use codeloom_core::Language;
    use tree_sitter::Parser;

    #[test]
    fn builds_arena_in_left_to_right_preorder() {
        let mut parser = Parser::new();
        parser.set_language(&ts_language(Language::JavaScript)).unwrap();
        let source = b"function add(a, b) { return a + b; }";
        let tree = parser.parse(source, None).unwrap();
        let ast = build_ast(&tree, source);

        assert!(!ast.is_empty());
        let root = ast.root().unwrap();
        assert_eq!(ast.get(root).kind, "program");

        let calls = ast.find_nodes_by_kind("binary_expression");
        assert_eq!(calls.len(), 1);
    }
}
