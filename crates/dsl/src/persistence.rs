//! JSON persistence for compiled-able DSL rules: one document per rule at
//! `<storage-root>/custom-rules/<rule_id>.json`, with versioned copies kept on update.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ast::RuleAst;
use crate::error::{DslError, Result};
use crate::validator::validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRule {
    pub id: String,
    pub version: String,
    pub ast: RuleAst,
}

fn bump_patch(version: &str) -> String {
    let mut parts: Vec<u64> = version.split('.').filter_map(|p| p.parse().ok()).collect();
    while parts.len() < 3 {
        parts.push(0);
    }
    parts[2] += 1;
    format!("{}.{}.{}", parts[0], parts[1], parts[2])
}

/// On-disk store for DSL rules, rooted at `<storage-root>/custom-rules/`.
pub struct DslStore {
    root: PathBuf,
}

impl DslStore {
    #[must_use]
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            root: storage_root.into().join("custom-rules"),
        }
    }

    fn canonical_path(&self, rule_id: &str) -> PathBuf {
        self.root.join(format!("{rule_id}.json"))
    }

    fn versioned_path(&self, rule_id: &str, version: &str) -> PathBuf {
        self.root.join(format!("{rule_id}_v{version}.json"))
    }

    /// Validates `ast`, then writes it to disk as the canonical `<rule_id>.json`.
    /// If a prior version already exists, its version is bumped (semver patch) and a
    /// historical copy is kept at `<rule_id>_v<old-version>.json` before the overwrite.
    pub fn save(&self, rule_id: &str, ast: &RuleAst) -> Result<StoredRule> {
        let outcome = validate(ast);
        if !outcome.is_valid() {
            return Err(DslError::Semantic { messages: outcome.errors });
        }

        fs::create_dir_all(&self.root)?;

        let version = match self.load(rule_id) {
            Ok(existing) => {
                let history_path = self.versioned_path(rule_id, &existing.version);
                fs::write(&history_path, fs::read_to_string(self.canonical_path(rule_id))?)?;
                bump_patch(&existing.version)
            }
            Err(DslError::NotFound(_) | DslError::Io(_)) => "1.0.0".to_string(),
            Err(other) => return Err(other),
        };

        let stored = StoredRule {
            id: rule_id.to_string(),
            version,
            ast: ast.clone(),
        };
        self.write(&self.canonical_path(rule_id), &stored)?;
        Ok(stored)
    }

    /// Loads the canonical stored rule for `rule_id`.
    pub fn load(&self, rule_id: &str) -> Result<StoredRule> {
        let path = self.canonical_path(rule_id);
        if !path.exists() {
            return Err(DslError::NotFound(rule_id.to_string()));
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// JSON serialization of the stored rule, 2-space indented.
    pub fn export(&self, rule_id: &str) -> Result<String> {
        let stored = self.load(rule_id)?;
        self.to_json(&stored)
    }

    /// Validates `ast`, then stores it under `rule_id` — identical to [`Self::save`],
    /// exposed separately so callers can express "import" and "update an existing
    /// rule" as distinct intents even though they do the same validate-then-store work.
    pub fn import(&self, rule_id: &str, ast: &RuleAst) -> Result<StoredRule> {
        self.save(rule_id, ast)
    }

    fn write(&self, path: &Path, stored: &StoredRule) -> Result<()> {
        fs::write(path, self.to_json(stored)?)?;
        Ok(())
    }

    fn to_json(&self, stored: &StoredRule) -> Result<String> {
        let buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
        let mut ser = serde_json::Serializer::with_formatter(buf, formatter);
        stored.serialize(&mut ser)?;
        Ok(String::from_utf8(ser.into_inner()).expect("serde_json output is always valid UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn sample_ast() -> RuleAst {
        parse(&lex(r#"rule "X" { target: "if_statement" action { type: extract } }"#).unwrap()).unwrap()
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = DslStore::new(dir.path());
        store.save("my_rule", &sample_ast()).unwrap();

        let loaded = store.load("my_rule").unwrap();
        assert_eq!(loaded.ast.name, "X");
        assert_eq!(loaded.version, "1.0.0");
    }

    #[test]
    fn update_bumps_patch_and_keeps_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = DslStore::new(dir.path());
        store.save("my_rule", &sample_ast()).unwrap();
        let second = store.save("my_rule", &sample_ast()).unwrap();
        assert_eq!(second.version, "1.0.1");

        let history = dir.path().join("custom-rules").join("my_rule_v1.0.0.json");
        assert!(history.exists());
    }

    #[test]
    fn rejects_invalid_rule_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = DslStore::new(dir.path());
        let mut bad = sample_ast();
        bad.target = None;
        assert!(store.save("bad_rule", &bad).is_err());
    }

    #[test]
    fn load_missing_rule_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = DslStore::new(dir.path());
        assert!(matches!(store.load("nope"), Err(DslError::NotFound(_))));
    }
}
