//! Compiles a validated [`RuleAst`] into a [`CompiledRule`] that plugs into the Rule
//! Engine through the same [`Rule`] trait built-in rules implement.

use codeloom_core::heuristics::{base_complexity, language_features, strip_comments};
use codeloom_core::{Language, Snippet, SnippetDetail, SnippetType};
use codeloom_rules::rule::{Rule, RuleConfig, RuleContext};

use crate::ast::{ActionAst, ConditionAst, Operator, ParamValue, RuleAst, Value};
use crate::diagnostics::DslDiagnostic;

fn string_matches(operator: &Operator, haystack: &str, needle: &str) -> bool {
    match operator {
        Operator::Equals => haystack == needle,
        Operator::Contains => haystack.contains(needle),
        Operator::Matches => regex::Regex::new(needle).is_ok_and(|re| re.is_match(haystack)),
        Operator::GreaterThan => haystack > needle,
        Operator::LessThan => haystack < needle,
    }
}

fn number_matches(operator: &Operator, actual: f64, expected: f64) -> bool {
    match operator {
        Operator::Equals => (actual - expected).abs() < f64::EPSILON,
        Operator::Contains | Operator::Matches => false,
        Operator::GreaterThan => actual > expected,
        Operator::LessThan => actual < expected,
    }
}

fn language_feature_present(name: &str, content: &str) -> bool {
    let features = language_features(content);
    match name {
        "async" => features.uses_async,
        "generators" => features.uses_generators,
        "destructuring" => features.uses_destructuring,
        "spread" => features.uses_spread,
        "templateLiterals" => features.uses_template_literals,
        _ => false,
    }
}

fn eval_condition(condition: &ConditionAst, node_kind: &str, content: &str) -> bool {
    match condition.field.as_str() {
        "nodeType" => match &condition.value {
            Value::Str(s) => string_matches(&condition.operator, node_kind, s),
            Value::Num(_) => false,
        },
        "contentPattern" => match &condition.value {
            Value::Str(s) => string_matches(&condition.operator, content, s),
            Value::Num(_) => false,
        },
        "complexity" => match &condition.value {
            Value::Num(n) => number_matches(&condition.operator, f64::from(base_complexity(content)), *n),
            Value::Str(_) => false,
        },
        "languageFeature" => match &condition.value {
            Value::Str(s) => language_feature_present(s, content),
            Value::Num(_) => false,
        },
        _ => false,
    }
}

fn param_bool(parameters: &[(String, ParamValue)], key: &str, default: bool) -> bool {
    parameters
        .iter()
        .find(|(k, _)| k == key)
        .map_or(default, |(_, v)| matches!(v, ParamValue::Bool(true)))
}

/// A DSL rule, compiled from its [`RuleAst`]. Implements [`Rule`] for its `extract`
/// action, so the Rule Engine dispatches it exactly like a built-in rule; `highlight`
/// and `report` actions are run separately, through [`CompiledRule::diagnostics_for`],
/// since they don't produce a snippet.
pub struct CompiledRule {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_kind: String,
    /// `target_kind` leaked to `'static` so `supported_node_kinds` can hand back a
    /// `&[&str]` the same way built-in rules do with string literals. Compiled rules
    /// are few and long-lived (held in a registry for the process lifetime), so this
    /// is a one-time, bounded cost rather than a per-call leak.
    target_kinds: [&'static str; 1],
    conditions: Vec<ConditionAst>,
    actions: Vec<ActionAst>,
}

impl CompiledRule {
    #[must_use]
    pub fn compile(id: impl Into<String>, ast: RuleAst) -> Self {
        let target_kind = ast.target.unwrap_or_default();
        let leaked: &'static str = Box::leak(target_kind.clone().into_boxed_str());
        Self {
            id: id.into(),
            name: ast.name,
            description: ast.description,
            target_kind,
            target_kinds: [leaked],
            conditions: ast.conditions,
            actions: ast.actions,
        }
    }

    fn conditions_hold(&self, node_kind: &str, content: &str) -> bool {
        self.conditions
            .iter()
            .all(|c| eval_condition(c, node_kind, content))
    }

    fn extract_action(&self) -> Option<&ActionAst> {
        self.actions.iter().find(|a| a.action_type == "extract")
    }

    /// Runs this rule's non-`extract` actions (`highlight`/`report`) against every node
    /// matching `target_kind`, independent of the Rule Engine's snippet pass.
    #[must_use]
    pub fn diagnostics_for(&self, ast: &codeloom_core::Ast, source: &str) -> Vec<DslDiagnostic> {
        let mut out = Vec::new();
        for node_id in ast.find_nodes_by_kind(&self.target_kind) {
            let node = ast.get(node_id);
            let content = ast.content_of(node_id, source);
            if !self.conditions_hold(&node.kind, content) {
                continue;
            }
            for action in &self.actions {
                if action.action_type == "extract" {
                    continue;
                }
                let message = action
                    .parameters
                    .iter()
                    .find(|(k, _)| k == "message")
                    .map_or_else(
                        || format!("rule '{}' matched", self.name),
                        |(_, v)| match v {
                            ParamValue::Str(s) => s.clone(),
                            other => format!("{other:?}"),
                        },
                    );
                out.push(DslDiagnostic {
                    rule_id: self.id.clone(),
                    node_kind: node.kind.clone(),
                    start_line: node.start_pos.row + 1,
                    message,
                });
            }
        }
        out
    }
}

impl Rule for CompiledRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn snippet_type(&self) -> SnippetType {
        SnippetType::LogicBlock
    }

    fn config(&self) -> RuleConfig {
        RuleConfig::default()
    }

    fn supported_node_kinds(&self, _language: Language) -> &[&str] {
        &self.target_kinds
    }

    fn should_process(&self, ctx: &RuleContext<'_>) -> bool {
        self.extract_action().is_some() && self.conditions_hold(&ctx.ast_node().kind, ctx.content())
    }

    fn create_snippet(&self, ctx: &RuleContext<'_>) -> Snippet {
        let Some(action) = self.extract_action() else {
            unreachable!("create_snippet only called after should_process confirmed an extract action");
        };
        let include_comments = param_bool(&action.parameters, "includeComments", true);
        let raw_content = ctx.content();
        let content = if include_comments {
            raw_content.to_string()
        } else {
            strip_comments(raw_content)
        };

        let node = ctx.ast_node();
        let complexity = base_complexity(&content);
        Snippet {
            id: codeloom_rules::snippet_id(self.snippet_type(), node.start_pos.row + 1, &content),
            start_line: node.start_pos.row + 1,
            end_line: node.end_pos.row + 1,
            start_byte: node.start_byte,
            end_byte: node.end_byte,
            language: ctx.language,
            name: node.name.clone(),
            chunk_metadata: codeloom_core::ChunkMetadata {
                language: Some(ctx.language),
                complexity,
                lines_of_code: codeloom_core::heuristics::non_blank_line_count(&content),
                ..codeloom_core::ChunkMetadata::default()
            },
            snippet_metadata: codeloom_core::SnippetMetadata {
                snippet_type: self.snippet_type(),
                context_info: ctx.context_info(),
                language_features: language_features(&content),
                complexity,
                is_standalone: true,
                has_side_effects: codeloom_core::heuristics::has_side_effects(&content),
                detail: SnippetDetail::None,
            },
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn compiled(source: &str) -> CompiledRule {
        let ast = parse(&lex(source).unwrap()).unwrap();
        CompiledRule::compile("test_rule", ast)
    }

    #[test]
    fn matches_content_pattern_condition() {
        let rule = compiled(
            r#"rule "AsyncFns" {
                description: "d"
                target: "function_declaration"
                condition { contentPattern: contains("async") }
                action { type: extract }
            }"#,
        );
        assert!(rule.conditions_hold("function_declaration", "async function f() {}"));
        assert!(!rule.conditions_hold("function_declaration", "function f() {}"));
    }

    #[test]
    fn matches_complexity_condition() {
        let rule = compiled(
            r#"rule "Complex" {
                target: "function_declaration"
                condition { complexity: greaterThan(3) }
                action { type: extract }
            }"#,
        );
        assert!(rule.conditions_hold("function_declaration", "if (a && b || c) { f(); g(); }"));
        assert!(!rule.conditions_hold("function_declaration", "x"));
    }
}
