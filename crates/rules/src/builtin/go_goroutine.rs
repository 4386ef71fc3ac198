use std::sync::LazyLock;

use codeloom_core::{Language, Snippet, SnippetDetail, SnippetType};
use regex::Regex;

use crate::common::build_snippet;
use crate::rule::{Rule, RuleConfig, RuleContext};

static GO_STMT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bgo\s+\w").unwrap());
/// The channel's element type, from `chan T` / `chan<- T` declarations — not the
/// variable name, which the `channels` field is keyed on per its element type.
static CHANNEL_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bchan\b\s*(?:<-\s*)?(\w+)").unwrap());
static CHANNEL_OP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<-").unwrap());
static SELECT_STMT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bselect\s*\{").unwrap());
static WAITGROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"sync\.WaitGroup|\.Wait\(\)|\.Add\(").unwrap());
static MUTEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"sync\.Mutex|sync\.RWMutex|\.Lock\(\)").unwrap());

fn purpose(uses_select: bool, uses_waitgroup: bool, uses_mutex: bool, uses_channel_ops: bool) -> &'static str {
    if uses_select {
        "channel_multiplexing"
    } else if uses_waitgroup {
        "fan_out_fan_in_synchronization"
    } else if uses_mutex {
        "guarded_shared_state"
    } else if uses_channel_ops {
        "concurrent_processing_with_communication"
    } else {
        "concurrent_task_dispatch"
    }
}

/// Goroutine launches (`go f()`), channel operations, `select`, and the `sync`
/// primitives that usually accompany them.
pub struct GoGoroutineRule;

impl Rule for GoGoroutineRule {
    fn name(&self) -> &'static str {
        "go_goroutine"
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::Goroutine
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Go => &["go_statement", "select_statement"],
            _ => &[],
        }
    }

    fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let content = ctx.content();
        let goroutines = GO_STMT.find_iter(content).count() as u32;
        let channels = CHANNEL_TYPE
            .captures_iter(content)
            .map(|c| c[1].to_string())
            .collect();
        let uses_select = SELECT_STMT.is_match(content);
        let uses_waitgroup = WAITGROUP.is_match(content);
        let uses_mutex = MUTEX.is_match(content);
        let uses_channel_ops = CHANNEL_OP.is_match(content);
        let detail = SnippetDetail::Goroutine {
            goroutines: goroutines.max(1),
            channels,
            uses_select,
            uses_waitgroup,
            uses_mutex,
            purpose: purpose(uses_select, uses_waitgroup, uses_mutex, uses_channel_ops).to_string(),
        };
        build_snippet(ctx, self.snippet_type(), detail, true, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_send_receive_is_concurrent_processing_with_communication() {
        let content = "ch := make(chan int); go func(){ ch <- 1 }(); v := <-ch";
        let channels: Vec<String> = CHANNEL_TYPE.captures_iter(content).map(|c| c[1].to_string()).collect();
        assert!(channels.contains(&"int".to_string()));

        let uses_select = SELECT_STMT.is_match(content);
        let uses_waitgroup = WAITGROUP.is_match(content);
        let uses_mutex = MUTEX.is_match(content);
        let uses_channel_ops = CHANNEL_OP.is_match(content);
        assert_eq!(
            purpose(uses_select, uses_waitgroup, uses_mutex, uses_channel_ops),
            "concurrent_processing_with_communication"
        );
    }

    #[test]
    fn select_takes_priority_over_channel_communication() {
        assert_eq!(purpose(true, true, true, true), "channel_multiplexing");
    }
}
