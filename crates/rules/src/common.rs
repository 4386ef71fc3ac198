//! Shared snippet-construction helper used by every built-in rule.

use codeloom_core::heuristics::{base_complexity, has_side_effects, language_features, non_blank_line_count};
use codeloom_core::{ChunkMetadata, Snippet, SnippetDetail, SnippetMetadata, SnippetType};

use crate::id::snippet_id;
use crate::rule::RuleContext;

/// Assembles a [`Snippet`] from a matched node, using the shared complexity/side-effect/
/// language-feature heuristics. Every built-in rule goes through this so the ~19 rules
/// differ only in node-kind matching, `should_process`, and `detail` — not in how the
/// common fields get populated.
pub fn build_snippet(
    ctx: &RuleContext<'_>,
    snippet_type: SnippetType,
    detail: SnippetDetail,
    is_standalone: bool,
    complexity_override: Option<u32>,
) -> Snippet {
    let content = ctx.content().to_string();
    let node = ctx.ast_node();
    let complexity = complexity_override.unwrap_or_else(|| base_complexity(&content));

    Snippet {
        id: snippet_id(snippet_type, node.start_pos.row + 1, &content),
        start_line: node.start_pos.row + 1,
        end_line: node.end_pos.row + 1,
        start_byte: node.start_byte,
        end_byte: node.end_byte,
        language: ctx.language,
        name: node.name.clone(),
        chunk_metadata: ChunkMetadata {
            language: Some(ctx.language),
            complexity,
            lines_of_code: non_blank_line_count(&content),
            ..ChunkMetadata::default()
        },
        snippet_metadata: SnippetMetadata {
            snippet_type,
            context_info: ctx.context_info(),
            language_features: language_features(&content),
            complexity,
            is_standalone,
            has_side_effects: has_side_effects(&content),
            detail,
        },
        content,
    }
}

/// Shared "is this just a trivial one-liner" filter used by several rules
/// (content shorter than 50 chars AND at most 2 non-blank lines).
#[must_use]
pub fn is_trivial_one_liner(content: &str) -> bool {
    content.len() < 50 && non_blank_line_count(content) <= 2
}
