//! Language-specific ancestor-kind tables for `context_info.parent_function` / `parent_class`.

use codeloom_core::{Ast, ContextInfo, Language, NodeId};

const MAX_ANCESTOR_STEPS: usize = 50;

pub(crate) fn function_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript | Language::TypeScript => &[
            "function_declaration",
            "function_expression",
            "arrow_function",
            "method_definition",
            "generator_function_declaration",
            "generator_function",
        ],
        Language::Python => &["function_definition"],
        Language::Go => &["function_declaration", "method_declaration"],
        Language::Java => &["method_declaration", "constructor_declaration"],
        Language::Rust => &["function_item"],
        Language::Cpp | Language::C => &["function_definition"],
        Language::Markdown => &[],
    }
}

pub(crate) fn class_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript | Language::TypeScript => &["class_declaration", "class"],
        Language::Python => &["class_definition"],
        Language::Go => &["type_declaration"],
        Language::Java => &["class_declaration", "interface_declaration"],
        Language::Rust => &["struct_item", "impl_item", "trait_item"],
        Language::Cpp => &["class_specifier", "struct_specifier"],
        Language::C => &["struct_specifier"],
        Language::Markdown => &[],
    }
}

/// Resolves `context_info` by walking `node`'s parents (bounded to 50 steps) for the
/// first function-like, then class-like, ancestor; the node's `name` field (populated
/// by the builder from the grammar's `name` field, when one exists) is the string used.
#[must_use]
pub fn resolve_context(ast: &Ast, node: NodeId, language: Language, nesting_level: usize) -> ContextInfo {
    let parent_function = ast
        .find_ancestor_kind(node, function_kinds(language), MAX_ANCESTOR_STEPS)
        .and_then(|id| ast.get(id).name.clone());
    let parent_class = ast
        .find_ancestor_kind(node, class_kinds(language), MAX_ANCESTOR_STEPS)
        .and_then(|id| ast.get(id).name.clone());

    ContextInfo {
        nesting_level,
        parent_function,
        parent_class,
    }
}
