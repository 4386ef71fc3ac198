use codeloom_core::{heuristics::non_blank_line_count, Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

const MIN_STATEMENTS: usize = 2;
const LONG_BLOCK_LEN: usize = 50;

/// Plain statement blocks: at least two statements, or long enough, or containing a
/// nested function — catches logic that doesn't fit any of the more specific rules.
pub struct LogicBlockRule;

impl Rule for LogicBlockRule {
    fn name(&self) -> &'static str {
        "logic_block"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::LogicBlock
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript | Language::Java | Language::Cpp | Language::C => {
                &["statement_block", "block"]
            }
            Language::Python => &["block"],
            Language::Go => &["block"],
            Language::Rust => &["block"],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        let content = ctx.content();
        non_blank_line_count(content) >= MIN_STATEMENTS
            || content.len() > LONG_BLOCK_LEN
            || content.contains("function")
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, true, None)
    }
}
