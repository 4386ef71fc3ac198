//! Rule Registry and Rule Engine: the built-in extraction rules and the single AST
//! walk that dispatches them.
//!
//! A rule is any [`Rule`] trait object — built-in ([`builtin`]) or DSL-compiled
//! (`codeloom-dsl`'s `CompiledRule`). [`RuleRegistry`] owns the full built-in set and
//! narrows it per [`SelectionPolicy`]; [`engine::RuleEngine`] walks an AST once and
//! dispatches every selected rule at every node, containing per-rule panics and
//! deduping by snippet id.

pub mod builtin;
pub mod chunking;
pub mod common;
pub mod context;
pub mod engine;
pub mod id;
pub mod registry;
pub mod rule;

pub use chunking::extract_chunks;
pub use engine::RuleEngine;
pub use id::snippet_id;
pub use registry::{FocusArea, RuleRegistry, SelectionPolicy};
pub use rule::{Rule, RuleConfig, RuleContext};
