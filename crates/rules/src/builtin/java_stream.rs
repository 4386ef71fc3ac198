use std::sync::LazyLock;

use codeloom_core::{Language, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static STREAM_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(stream|filter|map|collect|reduce|sorted|forEach|flatMap)\s*\(").unwrap());
static COLLECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Collectors\.(\w+)\s*\(").unwrap());

/// Java `Stream` pipelines (`.stream().filter().collect(...)`), requiring the `.stream()`
/// call itself plus at least one further chained operation.
pub struct JavaStreamRule;

impl Rule for JavaStreamRule {
    fn name(&self) -> &'static str {
        "java_stream"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::Stream
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Java => &["method_invocation"],
            _ => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        let content = ctx.content();
        content.contains(".stream(") && STREAM_CALL.find_iter(content).count() >= 2
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let collectors = COLLECTOR
            .captures_iter(content)
            .map(|c| c[1].to_string())
            .collect();
        let chain_depth = STREAM_CALL.find_iter(content).count() as u32;
        let detail = SnippetDetail::Stream {
            collectors,
            chain_depth,
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}
