use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Generic/type-parameter lists — Rust's `<T: Bound>`, TS's `<T extends U>`,
/// Java's `<T>`, Go's type parameter lists.
pub struct GenericPatternRule;

impl Rule for GenericPatternRule {
    fn name(&self) -> &'static str {
        "generic_pattern"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::GenericPattern
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::TypeScript => &["type_parameters"],
            Language::Java => &["type_parameters"],
            Language::Rust => &["type_parameters", "where_clause"],
            Language::Go => &["type_parameter_list"],
            Language::JavaScript | Language::Python | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.content().len() > 3
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
