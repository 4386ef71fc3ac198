//! The Parser Core: wraps per-language tree-sitter grammars, builds an owned
//! [`codeloom_core::Ast`] arena from the borrowed tree-sitter tree, and caches results
//! behind a bounded LRU keyed by content fingerprint.

pub mod builder;
pub mod cache;
pub mod grammar;
pub mod parser;

pub use builder::build_ast;
pub use cache::{CacheStats, ParseCache};
pub use grammar::ts_language;
pub use parser::ParserCore;
