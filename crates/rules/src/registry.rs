//! Rule Registry: holds the full built-in rule set and applies a selection policy.

use codeloom_core::{FrameworkTag, Language};

use crate::builtin;
use crate::rule::Rule;

/// A pre-declared subset used by the `Focused` selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusArea {
    Performance,
    Architecture,
    Patterns,
    Concurrency,
}

/// How a caller narrows the comprehensive rule set down to what they actually want run.
/// Selection is pure — it never mutates the registry, only filters a view over it.
pub enum SelectionPolicy {
    /// Every built-in rule.
    Comprehensive,
    /// Comprehensive, narrowed to rules relevant to one language.
    LanguageSpecific(Language),
    /// One of a handful of pre-declared topical subsets.
    Focused(FocusArea),
    /// Comprehensive, narrowed to rules tagged for one framework.
    FrameworkSpecific(FrameworkTag),
}

/// Owns every built-in rule; construction is the only place that allocates the
/// `Box<dyn Rule>` trait objects, so selection can stay cheap (borrow + filter).
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin::all_builtin_rules(),
        }
    }

    /// All rules, ignoring selection — used by tests and by `rules list --comprehensive`.
    #[must_use]
    pub fn all(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Rules selected by `policy`, as a borrowed view over the registry.
    #[must_use]
    pub fn select(&self, policy: &SelectionPolicy) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .map(AsRef::as_ref)
            .filter(|rule| matches_policy(*rule, policy))
            .collect()
    }
}

fn matches_policy(rule: &dyn Rule, policy: &SelectionPolicy) -> bool {
    match policy {
        SelectionPolicy::Comprehensive => true,
        SelectionPolicy::LanguageSpecific(language) => !rule.supported_node_kinds(*language).is_empty(),
        SelectionPolicy::Focused(area) => builtin::focus_area_rules(*area).contains(&rule.name()),
        SelectionPolicy::FrameworkSpecific(tag) => builtin::framework_rules(*tag).contains(&rule.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comprehensive_includes_every_rule() {
        let registry = RuleRegistry::new();
        let selected = registry.select(&SelectionPolicy::Comprehensive);
        assert_eq!(selected.len(), registry.all().len());
    }

    #[test]
    fn language_specific_excludes_go_only_rules_for_python() {
        let registry = RuleRegistry::new();
        let selected = registry.select(&SelectionPolicy::LanguageSpecific(Language::Python));
        assert!(!selected.iter().any(|r| r.name() == "go_goroutine"));
        assert!(selected.iter().any(|r| r.name() == "python_comprehension"));
    }

    #[test]
    fn focused_concurrency_includes_goroutines() {
        let registry = RuleRegistry::new();
        let selected = registry.select(&SelectionPolicy::Focused(FocusArea::Concurrency));
        assert!(selected.iter().any(|r| r.name() == "go_goroutine"));
        assert!(!selected.iter().any(|r| r.name() == "template_literal"));
    }
}
