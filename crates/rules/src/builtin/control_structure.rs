use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::{build_snippet, is_trivial_one_liner};
use crate::rule::{Rule, RuleConfig, RuleContext};

/// `if`/`for`/`while`/`switch` and their language-specific equivalents, excluding
/// trivial one-liners (content under 50 chars and at most 2 non-blank lines).
pub struct ControlStructureRule;

impl Rule for ControlStructureRule {
    fn name(&self) -> &'static str {
        "control_structure"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::ControlStructure
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &[
                "if_statement",
                "for_statement",
                "for_in_statement",
                "while_statement",
                "do_statement",
                "switch_statement",
            ],
            Language::Python => &["if_statement", "for_statement", "while_statement", "match_statement"],
            Language::Go => &[
                "if_statement",
                "for_statement",
                "expression_switch_statement",
                "type_switch_statement",
            ],
            Language::Java => &[
                "if_statement",
                "for_statement",
                "while_statement",
                "do_statement",
                "switch_expression",
            ],
            Language::Rust => &[
                "if_expression",
                "for_expression",
                "while_expression",
                "loop_expression",
                "match_expression",
            ],
            Language::Cpp | Language::C => &[
                "if_statement",
                "for_statement",
                "while_statement",
                "do_statement",
                "switch_statement",
            ],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        !is_trivial_one_liner(ctx.content())
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, true, None)
    }
}
