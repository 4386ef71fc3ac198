//! codeloom - A multi-language code parsing and snippet-extraction library.
//!
//! This is the main library crate that re-exports functionality from the various
//! component crates in the workspace.

pub use codeloom_core as core;
pub use codeloom_dsl as dsl;
pub use codeloom_parser as parser;
pub use codeloom_rules as rules;
pub use codeloom_validator as validator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
