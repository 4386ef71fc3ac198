use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Comma-separated expression sequences (the JS `,` operator and its rare Go/C
/// equivalents) — always worth surfacing since the grammar only emits this node
/// when more than one expression is actually chained.
pub struct ExpressionSequenceRule;

impl Rule for ExpressionSequenceRule {
    fn name(&self) -> &'static str {
        "expression_sequence"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::ExpressionSequence
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["sequence_expression"],
            Language::Cpp | Language::C => &["comma_expression"],
            Language::Python | Language::Go | Language::Java | Language::Rust | Language::Markdown => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
