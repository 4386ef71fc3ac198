use codeloom_core::{Language, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

const MIN_ENTRIES_FOR_INTEREST: usize = 3;

fn top_level_entry_count(content: &str) -> usize {
    let inner = content
        .trim()
        .trim_start_matches(['{', '['])
        .trim_end_matches(['}', ']']);
    let mut depth = 0i32;
    let mut count = 0usize;
    let mut saw_token = false;
    for c in inner.chars() {
        match c {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                count += 1;
                saw_token = false;
            }
            c if !c.is_whitespace() => saw_token = true,
            _ => {}
        }
    }
    if saw_token {
        count += 1;
    }
    count
}

/// Object and array literals with enough entries (or nesting) to be worth surfacing —
/// a two-element array or a one-field object is noise.
pub struct ObjectArrayLiteralRule;

impl Rule for ObjectArrayLiteralRule {
    fn name(&self) -> &'static str {
        "object_array_literal"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::ObjectArrayLiteral
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["object", "array"],
            Language::Python => &["dictionary", "list", "set"],
            Language::Go => &["literal_value"],
            Language::Java => &["array_initializer"],
            Language::Rust => &["array_expression", "struct_expression"],
            Language::Cpp | Language::C => &["initializer_list"],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        top_level_entry_count(ctx.content()) >= MIN_ENTRIES_FOR_INTEREST || ctx.content().contains('\n')
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> codeloom_core::Snippet {
        build_snippet(ctx, self.snippet_type(), SnippetDetail::None, false, None)
    }
}
