use std::sync::LazyLock;

use codeloom_core::heuristics::has_side_effects;
use codeloom_core::{FunctionalStyle, Language, Purity, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static FUNCTIONAL_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(map|filter|reduce|flat_map|fold|for_each|forEach)\s*\(").unwrap());
static IMPERATIVE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfor\s*\(|\bwhile\s*\(|\bfor\s+\w+\s+in\b").unwrap());

fn style(content: &str) -> FunctionalStyle {
    let functional_hits = FUNCTIONAL_CALL.find_iter(content).count();
    let imperative_hits = IMPERATIVE_SHAPE.find_iter(content).count();
    match (functional_hits > 0, imperative_hits > 0) {
        (true, false) => FunctionalStyle::Declarative,
        (false, true) => FunctionalStyle::Imperative,
        (true, true) => FunctionalStyle::Hybrid,
        (false, false) => FunctionalStyle::Hybrid,
    }
}

fn purity(content: &str) -> Purity {
    if has_side_effects(content) {
        if FUNCTIONAL_CALL.is_match(content) {
            Purity::Mixed
        } else {
            Purity::Impure
        }
    } else {
        Purity::Pure
    }
}

/// Functional-style chains (`.map().filter().reduce()` and language equivalents),
/// requiring at least two chained functional calls to distinguish from a bare `.map()`.
pub struct FunctionalProgrammingRule;

impl Rule for FunctionalProgrammingRule {
    fn name(&self) -> &'static str {
        "functional_programming"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::FunctionalProgramming
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["call_expression"],
            Language::Rust => &["method_call_expression"],
            Language::Python | Language::Go | Language::Java | Language::Cpp | Language::C | Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        FUNCTIONAL_CALL.find_iter(ctx.content()).count() >= 2
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let chaining_depth = FUNCTIONAL_CALL.find_iter(content).count() as u32;
        let detail = SnippetDetail::Functional {
            style: style(content),
            purity: purity(content),
            chaining_depth,
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}
