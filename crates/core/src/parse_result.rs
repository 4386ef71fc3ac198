//! The Parser Core's output type.

use serde::{Deserialize, Serialize};

use crate::ast::Ast;
use crate::language::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<Ast>,
    pub language: Language,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub parse_time_ms: u64,
    /// Set when a resource bound (size, node count, wall clock) truncated extraction.
    pub partial: bool,
}

impl ParseResult {
    pub fn failure(language: Language, error: impl Into<String>, parse_time_ms: u64) -> Self {
        Self {
            ast: None,
            language,
            success: false,
            error: Some(error.into()),
            parse_time_ms,
            partial: false,
        }
    }

    pub fn success(language: Language, ast: Ast, parse_time_ms: u64) -> Self {
        Self {
            ast: Some(ast),
            language,
            success: true,
            error: None,
            parse_time_ms,
            partial: false,
        }
    }
}
