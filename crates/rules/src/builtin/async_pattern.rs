use std::sync::LazyLock;

use codeloom_core::{Language, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static ASYNC_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\basync\b|\bawait\b|\.then\s*\(|\bgoroutine\b").unwrap());

/// Async function/closure definitions — `async fn`, `async def`, `async () => {}`.
/// Broader await-expression matching is left to `function_call_chain`.
pub struct AsyncPatternRule;

impl Rule for AsyncPatternRule {
    fn name(&self) -> &'static str {
        "async_pattern"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::AsyncPattern
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &[
                "function_declaration",
                "arrow_function",
                "function_expression",
                "method_definition",
            ],
            Language::Python => &["function_definition"],
            Language::Rust => &["function_item", "closure_expression"],
            Language::Go | Language::Java | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        ASYNC_MARKER.is_match(ctx.content())
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, true, None)
    }
}
