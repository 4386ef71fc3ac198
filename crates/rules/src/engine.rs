//! The Rule Engine: walks an [`Ast`] once, dispatching every selected rule at every node.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use codeloom_core::{Ast, CoreConfig, Language, Snippet, ValidatorProfile};
use codeloom_validator::SnippetValidator;

use crate::registry::{RuleRegistry, SelectionPolicy};
use crate::rule::{Rule, RuleConfig, RuleContext};

/// Drives one pass of the registry's selected rules over a parsed file.
pub struct RuleEngine<'a> {
    registry: &'a RuleRegistry,
    validator: SnippetValidator,
}

impl<'a> RuleEngine<'a> {
    #[must_use]
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self {
            registry,
            validator: SnippetValidator::new(),
        }
    }

    /// Runs every rule selected by `policy` over `ast`, in pre-order node order, and
    /// returns the deduplicated, validated snippets it produced.
    ///
    /// A rule that panics on one node is contained: the panic is caught, logged via
    /// `tracing::warn!`, and extraction continues with the next rule/node rather than
    /// aborting the whole pass.
    pub fn extract(
        &self,
        ast: &Ast,
        source: &str,
        language: Language,
        policy: &SelectionPolicy,
        profile: ValidatorProfile,
        config: &CoreConfig,
    ) -> Vec<Snippet> {
        let rules = self.registry.select(policy);
        let mut snippets = Vec::new();
        let mut seen_ids = HashSet::new();

        ast.walk_preorder(|node, nesting_level| {
            if nesting_level > config.max_rule_depth {
                return;
            }
            if snippets.len() >= config.max_snippets_per_file {
                return;
            }
            let node_kind = ast.get(node).kind.as_str();

            for rule in &rules {
                let rule_config = rule.config();
                if nesting_level > rule_config.max_depth {
                    continue;
                }
                if !rule.supported_node_kinds(language).contains(&node_kind) {
                    continue;
                }
                let ctx = RuleContext {
                    ast,
                    node,
                    source,
                    language,
                    nesting_level,
                };

                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| self.run_rule(*rule, &ctx, profile, rule_config)));
                match outcome {
                    Ok(Some(snippet)) => {
                        if seen_ids.insert(snippet.id.clone()) {
                            snippets.push(snippet);
                        }
                    }
                    Ok(None) => {}
                    Err(payload) => {
                        let message = panic_message(&payload);
                        tracing::warn!(rule = rule.name(), node_kind, message, "rule panicked on node");
                    }
                }
            }
        });

        snippets
    }

    fn run_rule(
        &self,
        rule: &dyn Rule,
        ctx: &RuleContext<'_>,
        profile: ValidatorProfile,
        rule_config: RuleConfig,
    ) -> Option<Snippet> {
        if !rule.should_process(ctx) {
            return None;
        }
        let snippet = rule.create_snippet(ctx);

        let complexity = snippet.snippet_metadata.complexity;
        if complexity < rule_config.min_complexity || complexity > rule_config.max_complexity {
            tracing::debug!(
                rule = rule.name(),
                snippet_id = snippet.id,
                complexity,
                "snippet rejected by rule's complexity bounds"
            );
            return None;
        }
        let lines = snippet.chunk_metadata.lines_of_code;
        if lines < rule_config.min_lines || lines > rule_config.max_lines {
            tracing::debug!(
                rule = rule.name(),
                snippet_id = snippet.id,
                lines,
                "snippet rejected by rule's line-count bounds"
            );
            return None;
        }

        if self.validator.is_valid(&snippet, profile) {
            Some(snippet)
        } else {
            tracing::debug!(
                rule = rule.name(),
                snippet_id = snippet.id,
                reason = self.validator.rejection_reason(&snippet, profile),
                "snippet rejected by validator"
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeloom_core::Language;
    use codeloom_parser::{build_ast, ts_language};
    use tree_sitter::Parser;

    fn parse(source: &str, language: Language) -> Ast {
        let mut parser = Parser::new();
        parser.set_language(&ts_language(language)).unwrap();
        let tree = parser.parse(source, None).unwrap();
        build_ast(&tree, source.as_bytes())
    }

    #[test]
    fn extracts_control_structure_from_js() {
        let source = "function run(items) {\n  if (items.length > 0 && items[0].active) {\n    process(items);\n  }\n}";
        let ast = parse(source, Language::JavaScript);
        let registry = RuleRegistry::new();
        let engine = RuleEngine::new(&registry);
        let snippets = engine.extract(
            &ast,
            source,
            Language::JavaScript,
            &SelectionPolicy::Comprehensive,
            ValidatorProfile::TestDevelopment,
            &CoreConfig::default(),
        );
        assert!(snippets
            .iter()
            .any(|s| s.snippet_metadata.snippet_type == codeloom_core::SnippetType::ControlStructure));
    }

    #[test]
    fn deduplicates_identical_snippet_ids() {
        let source = "if (a && b) {\n  doThing();\n}";
        let ast = parse(source, Language::JavaScript);
        let registry = RuleRegistry::new();
        let engine = RuleEngine::new(&registry);
        let snippets = engine.extract(
            &ast,
            source,
            Language::JavaScript,
            &SelectionPolicy::Comprehensive,
            ValidatorProfile::TestDevelopment,
            &CoreConfig::default(),
        );
        let mut ids: Vec<_> = snippets.iter().map(|s| s.id.clone()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    /// A rule whose `config()` always rejects, to prove the engine actually reads it.
    struct NeverWideEnoughRule;

    impl Rule for NeverWideEnoughRule {
        fn name(&self) -> &str {
            "never_wide_enough"
        }

        fn snippet_type(&self) -> codeloom_core::SnippetType {
            codeloom_core::SnippetType::LogicBlock
        }

        fn config(&self) -> RuleConfig {
            RuleConfig {
                max_lines: 0,
                ..RuleConfig::default()
            }
        }

        fn supported_node_kinds(&self, _language: Language) -> &[&str] {
            &["if_statement"]
        }

        fn should_process(&self, _ctx: &RuleContext<'_>) -> bool {
            true
        }

        fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
            crate::common::build_snippet(
                ctx,
                self.snippet_type(),
                codeloom_core::SnippetDetail::None,
                true,
                None,
            )
        }
    }

    #[test]
    fn rule_config_line_bounds_reject_snippets_that_exceed_them() {
        let source = "function run(items) {\n  if (items.length > 0 && items[0].active) {\n    process(items);\n  }\n}";
        let ast = parse(source, Language::JavaScript);
        let rule = NeverWideEnoughRule;
        let ctx = RuleContext {
            ast: &ast,
            node: ast.root().unwrap(),
            source,
            language: Language::JavaScript,
            nesting_level: 0,
        };
        let registry = RuleRegistry::new();
        let engine = RuleEngine::new(&registry);
        assert!(engine
            .run_rule(&rule, &ctx, ValidatorProfile::TestDevelopment, rule.config())
            .is_none());
    }

    #[test]
    fn rule_max_depth_skips_rule_below_its_own_cutoff() {
        let source = "function run(items) {\n  if (items.length > 0 && items[0].active) {\n    process(items);\n  }\n}";
        let ast = parse(source, Language::JavaScript);
        let registry = RuleRegistry::new();
        let engine = RuleEngine::new(&registry);
        let config = CoreConfig {
            max_rule_depth: 0,
            ..CoreConfig::default()
        };
        let snippets = engine.extract(
            &ast,
            source,
            Language::JavaScript,
            &SelectionPolicy::Comprehensive,
            ValidatorProfile::TestDevelopment,
            &config,
        );
        assert!(snippets.is_empty());
    }

    #[test]
    fn extracts_goroutine_from_go() {
        let source = "func run(ch chan int) {\n\tgo func() {\n\t\tch <- 1\n\t}()\n\tselect {\n\tcase v := <-ch:\n\t\tfmt.Println(v)\n\t}\n}";
        let ast = parse(source, Language::Go);
        let registry = RuleRegistry::new();
        let engine = RuleEngine::new(&registry);
        let snippets = engine.extract(
            &ast,
            source,
            Language::Go,
            &SelectionPolicy::Comprehensive,
            ValidatorProfile::TestDevelopment,
            &CoreConfig::default(),
        );
        assert!(snippets
            .iter()
            .any(|s| s.snippet_metadata.snippet_type == codeloom_core::SnippetType::Goroutine));
    }
}
