//! Owned AST arena.
//!
//! The Parser Core hands back an [`Ast`] built from the underlying tree-sitter tree rather
//! than tree-sitter's own borrowed, lifetime-tied `Node`. Parents are modeled as an index
//! into the arena (`parent: Option<NodeId>`) instead of a back-pointer, per the design note
//! on ownership-strict targets: the arena and its nodes are `'static`, `Send + Sync`, and
//! freely shareable across worker threads without borrow-checker contortions.

use serde::{Deserialize, Serialize};

/// Index of a node within an [`Ast`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// A `(row, column)` position, both zero-based, matching tree-sitter's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

/// One AST node, owned by the arena that contains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstNode {
    pub kind: String,
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_pos: Position,
    pub end_pos: Position,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// The node's `name` field, when the grammar exposes one (e.g. a function's
    /// identifier) — used to resolve `context_info.parent_function` / `parent_class`.
    pub name: Option<String>,
}

/// An owned, arena-backed AST produced by the Parser Core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ast {
    nodes: Vec<AstNode>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a node into the arena and returns its id.
    pub fn push(&mut self, node: AstNode) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("AST larger than u32::MAX nodes"));
        self.nodes.push(node);
        id
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Backfills a node's `children`, used by the builder that converts a borrowed
    /// tree-sitter tree into this arena: a node's own id isn't known until after it's
    /// pushed, so its children list can only be attached once they exist too.
    pub fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        self.nodes[id.0 as usize].children = children;
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks up to `max_steps` parents from `id`, returning the first ancestor whose
    /// `kind` is in `kinds`. Used for `context_info.parent_function` / `parent_class`
    /// resolution; bounded so a deeply nested node can't make this walk unbounded.
    pub fn find_ancestor_kind(&self, id: NodeId, kinds: &[&str], max_steps: usize) -> Option<NodeId> {
        let mut current = self.get(id).parent;
        for _ in 0..max_steps {
            let Some(cur_id) = current else { break };
            let node = self.get(cur_id);
            if kinds.contains(&node.kind.as_str()) {
                return Some(cur_id);
            }
            current = node.parent;
        }
        None
    }

    /// Pre-order traversal (root, then children left-to-right), calling `visit` with each
    /// node's id and depth. This is the single shared traversal both `find_nodes_by_kind(s)`
    /// and the Rule Engine walk are built on, so batched queries cost no more than the sum
    /// of the single-kind queries they replace.
    pub fn walk_preorder(&self, mut visit: impl FnMut(NodeId, usize)) {
        let Some(root) = self.root else { return };
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            visit(id, depth);
            let node = self.get(id);
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Single-traversal query for nodes of one kind, in pre-order.
    pub fn find_nodes_by_kind(&self, kind: &str) -> Vec<NodeId> {
        self.find_nodes_by_kinds(&[kind])
    }

    /// Single-traversal query for nodes whose kind is any of `kinds`, in pre-order.
    /// Implemented as one walk bucketing matches, rather than one walk per kind, so a
    /// batched call costs the same as a single `find_nodes_by_kind` pass.
    pub fn find_nodes_by_kinds(&self, kinds: &[&str]) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk_preorder(|id, _depth| {
            if kinds.contains(&self.get(id).kind.as_str()) {
                out.push(id);
            }
        });
        out
    }

    pub fn content_of<'s>(&self, id: NodeId, source: &'s str) -> &'s str {
        let node = self.get(id);
        &source[node.start_byte..node.end_byte]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: &str, parent: Option<NodeId>) -> AstNode {
        AstNode {
            kind: kind.to_string(),
            start_byte: 0,
            end_byte: 0,
            start_pos: Position { row: 0, column: 0 },
            end_pos: Position { row: 0, column: 0 },
            children: Vec::new(),
            parent,
            name: None,
        }
    }

    #[test]
    fn preorder_visits_left_to_right() {
        let mut ast = Ast::new();
        let root = ast.push(leaf("root", None));
        let a = ast.push(leaf("a", Some(root)));
        let b = ast.push(leaf("b", Some(root)));
        ast.nodes[root.0 as usize].children = vec![a, b];
        ast.set_root(root);

        let mut order = Vec::new();
        ast.walk_preorder(|id, _| order.push(id));
        assert_eq!(order, vec![root, a, b]);
    }

    #[test]
    fn ancestor_search_is_bounded() {
        let mut ast = Ast::new();
        let root = ast.push(leaf("function_declaration", None));
        let mut parent = root;
        for _ in 0..5 {
            let child = ast.push(leaf("block", Some(parent)));
            ast.nodes[parent.0 as usize].children.push(child);
            parent = child;
        }
        ast.set_root(root);
        assert_eq!(
            ast.find_ancestor_kind(parent, &["function_declaration"], 50),
            Some(root)
        );
        assert_eq!(ast.find_ancestor_kind(parent, &["function_declaration"], 2), None);
    }
}
