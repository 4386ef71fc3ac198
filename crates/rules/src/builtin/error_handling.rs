use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// `try`/`throw` (and language equivalents). `catch`/`finally` are not matched
/// individually — they're part of the enclosing `try`'s content.
pub struct ErrorHandlingRule;

impl Rule for ErrorHandlingRule {
    fn name(&self) -> &'static str {
        "error_handling"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::ErrorHandling
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["try_statement", "throw_statement"],
            Language::Python => &["try_statement", "raise_statement"],
            Language::Java => &["try_statement", "throw_statement"],
            Language::Rust => &["try_expression"],
            Language::Cpp => &["try_statement", "throw_statement"],
            Language::Go | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, true, None)
    }
}
