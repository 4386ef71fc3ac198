use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Java lambda expressions (`x -> x.getName()`, `(a, b) -> { ... }`).
pub struct JavaLambdaRule;

impl Rule for JavaLambdaRule {
    fn name(&self) -> &'static str {
        "java_lambda"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::FunctionalProgramming
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Java => &["lambda_expression"],
            _ => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
