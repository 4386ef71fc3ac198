use std::sync::LazyLock;

use codeloom_core::{Language, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static INTERPOLATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]+\}").unwrap());

/// Template literals (JS/TS only), requiring at least one `${...}` interpolation —
/// a plain backtick string with no substitutions isn't interesting on its own.
pub struct TemplateLiteralRule;

impl Rule for TemplateLiteralRule {
    fn name(&self) -> &'static str {
        "template_literal"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::TemplateLiteral
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["template_string"],
            _ => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        INTERPOLATION.is_match(ctx.content())
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
