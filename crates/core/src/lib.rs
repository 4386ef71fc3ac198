//! Shared data model for codeloom's parsing and snippet-extraction core.
//!
//! This crate defines the types every other codeloom crate builds on: the [`Language`] tag,
//! the owned AST [`ast::Ast`] arena, the structural [`chunk::Chunk`] and the richer
//! [`snippet::Snippet`], plus the shared [`heuristics`] used by both the Rule Engine and the
//! Snippet Validator. It has no parsing logic of its own — that lives in `codeloom-parser`.

pub mod ast;
pub mod chunk;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod language;
pub mod parse_result;
pub mod snippet;

pub use ast::{Ast, AstNode, NodeId, Position};
pub use chunk::{Chunk, ChunkKind, ChunkMetadata};
pub use config::{CoreConfig, ValidatorProfile};
pub use error::{CoreError, Result};
pub use language::Language;
pub use parse_result::ParseResult;
pub use snippet::{
    CallType, ComprehensionKind, ContextInfo, FrameworkTag, FunctionalStyle, LanguageFeatures,
    Purity, Snippet, SnippetDetail, SnippetMetadata, SnippetType,
};
