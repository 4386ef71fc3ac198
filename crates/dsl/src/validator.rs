//! Semantic validation of a parsed DSL rule, independent of syntax.

use crate::ast::{ParamValue, RuleAst};

const VALID_CONDITION_FIELDS: &[&str] = &["nodeType", "contentPattern", "complexity", "languageFeature"];
const VALID_ACTION_TYPES: &[&str] = &["extract", "highlight", "report"];

/// Aggregated validation result: errors fail validation, warnings do not.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks name/target non-emptiness, at least one action, condition field/operator
/// validity, and non-null action parameter values. All checks run and aggregate —
/// this never short-circuits on the first error.
#[must_use]
pub fn validate(rule: &RuleAst) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    if rule.name.trim().is_empty() {
        outcome.errors.push("rule name must not be empty".to_string());
    }
    match &rule.target {
        Some(t) if !t.trim().is_empty() => {}
        _ => outcome.errors.push("rule target must not be empty".to_string()),
    }
    if rule.description.is_none() {
        outcome.warnings.push("rule has no description".to_string());
    }
    if rule.actions.is_empty() {
        outcome.errors.push("rule must declare at least one action".to_string());
    }

    for condition in &rule.conditions {
        if !VALID_CONDITION_FIELDS.contains(&condition.field.as_str()) {
            outcome.errors.push(format!(
                "line {}: unknown condition type '{}' (expected one of {:?})",
                condition.line, condition.field, VALID_CONDITION_FIELDS
            ));
        }
    }

    for action in &rule.actions {
        if !VALID_ACTION_TYPES.contains(&action.action_type.as_str()) {
            outcome.errors.push(format!(
                "line {}: unknown action type '{}' (expected one of {:?})",
                action.line, action.action_type, VALID_ACTION_TYPES
            ));
        }
        for (key, value) in &action.parameters {
            if let ParamValue::Str(s) = value {
                if s.is_empty() {
                    outcome
                        .errors
                        .push(format!("line {}: parameter '{key}' has an empty value", action.line));
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn rule(source: &str) -> RuleAst {
        parse(&lex(source).unwrap()).unwrap()
    }

    #[test]
    fn accepts_well_formed_rule() {
        let r = rule(
            r#"rule "X" { description: "d" target: "if_statement" action { type: extract } }"#,
        );
        let outcome = validate(&r);
        assert!(outcome.is_valid());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn warns_on_missing_description() {
        let r = rule(r#"rule "X" { target: "if_statement" action { type: extract } }"#);
        let outcome = validate(&r);
        assert!(outcome.is_valid());
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn rejects_unknown_condition_field() {
        let r = rule(
            r#"rule "X" { target: "if_statement" condition { bogusField: "x" } action { type: extract } }"#,
        );
        let outcome = validate(&r);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn rejects_unknown_action_type() {
        let r = rule(r#"rule "X" { target: "if_statement" action { type: bogus } }"#);
        let outcome = validate(&r);
        assert!(!outcome.is_valid());
    }
}
