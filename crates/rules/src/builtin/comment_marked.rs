use std::sync::LazyLock;

use codeloom_core::{Language, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[/#*\s]*@(snippet|code|example)\b").unwrap()
});

/// Comments explicitly flagged with an `@snippet`/`@code`/`@example` marker — an
/// author's own signal that this block is worth extracting, independent of shape.
pub struct CommentMarkedRule;

impl Rule for CommentMarkedRule {
    fn name(&self) -> &'static str {
        "comment_marked"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::CommentMarked
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript | Language::Java | Language::Go | Language::Cpp
            | Language::C | Language::Rust => &["comment", "line_comment", "block_comment"],
            Language::Python => &["comment"],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        MARKER.is_match(ctx.content().trim_start())
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
