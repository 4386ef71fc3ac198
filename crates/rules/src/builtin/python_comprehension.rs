use codeloom_core::{ComprehensionKind, Language, Snippet, SnippetDetail, SnippetType};

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

fn comp_kind(node_kind: &str) -> ComprehensionKind {
    match node_kind {
        "dictionary_comprehension" => ComprehensionKind::Dict,
        "set_comprehension" => ComprehensionKind::Set,
        "generator_expression" => ComprehensionKind::Generator,
        _ => ComprehensionKind::List,
    }
}

/// Python comprehensions (list/dict/set/generator), requiring an `if` condition or a
/// non-trivial transform expression — `[x for x in xs]` alone is too plain to surface.
pub struct PythonComprehensionRule;

impl Rule for PythonComprehensionRule {
    fn name(&self) -> &'static str {
        "python_comprehension"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::Comprehension
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Python => &[
                "list_comprehension",
                "dictionary_comprehension",
                "set_comprehension",
                "generator_expression",
            ],
            _ => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        let content = ctx.content();
        let conditions = content.matches(" if ").count();
        let loops = content.matches(" for ").count();
        let has_transform = content
            .splitn(2, " for ")
            .next()
            .is_some_and(|head| head.trim().len() > 1 && head.contains(|c: char| !c.is_alphanumeric() && c != '_' && c != '[' && c != '{' && c != '('));
        conditions > 0 || has_transform || loops > 1
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let conditions = content.matches(" if ").count() as u32;
        let loops = content.matches(" for ").count().max(1) as u32;
        let detail = SnippetDetail::Comprehension {
            comp_type: comp_kind(ctx.ast_node().kind.as_str()),
            conditions,
            loops,
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}
