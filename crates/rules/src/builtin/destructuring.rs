use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Destructuring patterns in variable declarations and function parameters.
/// Rust and Go don't get this rule — neither grammar has a dedicated destructuring node.
pub struct DestructuringAssignmentRule;

impl Rule for DestructuringAssignmentRule {
    fn name(&self) -> &'static str {
        "destructuring_assignment"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::DestructuringAssignment
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => {
                &["object_pattern", "array_pattern"]
            }
            Language::Python => &["pattern_list", "tuple_pattern"],
            Language::Go | Language::Java | Language::Rust | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
