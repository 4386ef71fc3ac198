//! `codeloom rules list`.

use anyhow::Result;
use codeloom_rules::RuleRegistry;

use super::parse_policy;
use crate::cli::RulesAction;
use crate::exit;

pub fn run(action: &RulesAction) -> Result<i32> {
    match action {
        RulesAction::List { policy } => {
            let policy = parse_policy(policy)?;
            let registry = RuleRegistry::new();
            let mut names: Vec<&str> = registry.select(&policy).iter().map(|r| r.name()).collect();
            names.sort_unstable();
            for name in names {
                println!("{name}");
            }
            Ok(exit::SUCCESS)
        }
    }
}
