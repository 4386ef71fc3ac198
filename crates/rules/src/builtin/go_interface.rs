use std::sync::LazyLock;

use codeloom_core::{Language, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static METHOD_SIG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*(\w+)\s*\([^)]*\)").unwrap());
static EMBEDDED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Z]\w*)\s*$").unwrap());

/// Go interface and struct type declarations, surfacing method signatures and
/// embedded types.
pub struct GoInterfaceRule;

impl Rule for GoInterfaceRule {
    fn name(&self) -> &'static str {
        "go_interface"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::Interface
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Go => &["interface_type", "struct_type", "method_declaration"],
            _ => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let method_signatures = METHOD_SIG
            .find_iter(content)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        let embedded = EMBEDDED
            .captures_iter(content)
            .map(|c| c[1].to_string())
            .collect();
        let interfaces = ctx
            .ast_node()
            .name
            .clone()
            .into_iter()
            .collect::<Vec<_>>();
        let purpose = if content.contains("interface") {
            "behavioral contract".to_string()
        } else {
            "data structure definition".to_string()
        };
        let detail = SnippetDetail::Interface {
            interfaces,
            embedded,
            method_signatures,
            purpose,
        };
        build_snippet(ctx, self.snippet_type(), detail, false, None)
    }
}
