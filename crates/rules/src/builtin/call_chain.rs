use std::sync::LazyLock;

use codeloom_core::{CallType, Language, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static MEMBER_CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w+\s*\(").unwrap());
static CALL_SITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+\s*\(").unwrap());
static ASYNC_OR_PROMISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bawait\b|\bPromise\b|\.then\s*\(|async\s+fn").unwrap());
/// Arrow functions (brace-bodied or bare-expression), `function` expressions, and
/// Rust-style `|args| ...` closures — any argument shaped like a callback.
static CALLBACK_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=>\s*\{|=>\s*[^\s{]|function\s*\(|\|[\w, ]*\|\s*\{|\|[\w, ]*\|\s*[^\s{]").unwrap());

fn chain_info(content: &str) -> (u32, bool, bool, CallType) {
    let chain_length = MEMBER_CALL.find_iter(content).count() as u32;
    let has_async = ASYNC_OR_PROMISE.is_match(content);
    let has_callbacks = CALLBACK_ARG.is_match(content);
    let call_type = if has_async {
        CallType::Async
    } else if has_callbacks {
        CallType::CallbackBased
    } else if chain_length > 1 {
        CallType::Chained
    } else {
        CallType::Simple
    };
    (chain_length, has_async, has_callbacks, call_type)
}

/// Method call chains, async/`Promise` call sites, and callback-bearing calls.
/// Bare single calls with simple arguments are skipped.
pub struct FunctionCallChainRule;

impl Rule for FunctionCallChainRule {
    fn name(&self) -> &'static str {
        "function_call_chain"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::FunctionCallChain
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::JavaScript | Language::TypeScript => &["call_expression", "expression_statement"],
            Language::Python => &["call", "expression_statement"],
            Language::Go => &["call_expression", "expression_statement"],
            Language::Java => &["method_invocation", "expression_statement"],
            Language::Rust => &["call_expression", "expression_statement"],
            Language::Cpp | Language::C => &["call_expression", "expression_statement"],
            Language::Markdown => &[],
        }
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        let content = ctx.content();
        if !CALL_SITE.is_match(content) {
            return false;
        }
        let (chain_length, has_async, has_callbacks, _) = chain_info(content);
        chain_length > 1 || has_async || has_callbacks || content.len() > 80
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let (chain_length, has_async, has_callbacks, call_type) = chain_info(ctx.content());
        let detail = SnippetDetail::CallChain {
            chain_length,
            has_async,
            has_callbacks,
            call_type,
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_expression_arrow_argument_is_callback_based() {
        let (_, _, has_callbacks, call_type) = chain_info("obj.a().b().c(d => d+1)");
        assert!(has_callbacks);
        assert_eq!(call_type, CallType::CallbackBased);
    }

    #[test]
    fn brace_bodied_arrow_argument_is_still_callback_based() {
        let (_, _, has_callbacks, call_type) = chain_info("obj.a().b().c(d => { return d + 1; })");
        assert!(has_callbacks);
        assert_eq!(call_type, CallType::CallbackBased);
    }
}
