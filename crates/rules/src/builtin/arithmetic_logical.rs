use std::sync::LazyLock;

use codeloom_core::{Language, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static MULTI_OP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+|-|\*|/|%|&&|\|\||==|!=|<=|>=|<|>)").unwrap());

/// Arithmetic/logical expressions with at least two operators — a single `a + b`
/// isn't a snippet worth surfacing on its own.
pub struct ArithmeticLogicalRule;

impl Rule for ArithmeticLogicalRule {
    fn name(&self) -> &'static str {
        "arithmetic_logical"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::ArithmeticLogicalExpression
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["binary_expression"],
            Language::Python => &["binary_operator", "boolean_operator"],
            Language::Go => &["binary_expression"],
            Language::Java => &["binary_expression"],
            Language::Rust => &["binary_expression"],
            Language::Cpp | Language::C => &["binary_expression"],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        MULTI_OP.find_iter(ctx.content()).count() >= 2
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
