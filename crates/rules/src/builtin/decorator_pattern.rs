use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Decorators (Python `@foo`, TS/JS experimental decorators, Java annotations, Rust
/// derive/attribute macros) attached to a declaration.
pub struct DecoratorPatternRule;

impl Rule for DecoratorPatternRule {
    fn name(&self) -> &'static str {
        "decorator_pattern"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::DecoratorPattern
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Python => &["decorated_definition"],
            Language::TypeScript => &["decorator"],
            Language::Java => &["annotation", "marker_annotation"],
            Language::Rust => &["attribute_item"],
            Language::JavaScript | Language::Go | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
