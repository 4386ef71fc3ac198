//! The `Rule` trait: the shared contract every built-in and DSL-compiled rule implements.

use codeloom_core::{Ast, AstNode, ContextInfo, Language, NodeId, Snippet};

use crate::context::resolve_context;

/// Per-rule tunables, all independently overridable; defaults mirror what most built-in
/// rules use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleConfig {
    pub max_depth: usize,
    pub min_complexity: u32,
    pub max_complexity: u32,
    pub min_lines: usize,
    pub max_lines: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            min_complexity: 2,
            max_complexity: 100,
            min_lines: 1,
            max_lines: 50,
        }
    }
}

/// Everything a rule needs to decide on, and build a snippet from, one AST node.
///
/// Bundled rather than passed as five separate arguments: every `Rule` method needs
/// the same five things, and the bundle grows a shared `content()`/`context_info()`
/// helper instead of each rule re-deriving them.
pub struct RuleContext<'a> {
    pub ast: &'a Ast,
    pub node: NodeId,
    pub source: &'a str,
    pub language: Language,
    pub nesting_level: usize,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn ast_node(&self) -> &'a AstNode {
        self.ast.get(self.node)
    }

    #[must_use]
    pub fn content(&self) -> &'a str {
        self.ast.content_of(self.node, self.source)
    }

    #[must_use]
    pub fn context_info(&self) -> ContextInfo {
        resolve_context(self.ast, self.node, self.language, self.nesting_level)
    }
}

/// One extraction rule: a node-kind predicate, a finer-grained gate, and a snippet
/// builder. Built-in rules and DSL-compiled rules ([`codeloom_dsl::CompiledRule`])
/// implement the same trait so the Rule Engine dispatches both identically.
pub trait Rule: Send + Sync {
    /// Unique rule name, used in rule-selection policies and `RuleInternalError` logs.
    /// `'static` for built-in rules; DSL-compiled rules borrow from their own stored name.
    fn name(&self) -> &str;

    fn snippet_type(&self) -> codeloom_core::SnippetType;

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    /// Node kinds this rule fires on for `language`. Empty means the rule never
    /// matches in that language (e.g. `GoInterfaceRule` outside Go).
    fn supported_node_kinds(&self, language: Language) -> &[&str];

    /// Finer-grained gate beyond node kind — most of a rule's distinguishing logic
    /// lives here (chain length, interpolation count, trivial one-liner filtering, …).
    fn should_process(&self, ctx: &RuleContext<'_>) -> bool;

    /// Builds the snippet for a node that passed `should_process`. Only called when
    /// `should_process` returned `true`.
    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet;
}
