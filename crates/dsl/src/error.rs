//! Error taxonomy for the custom-rule DSL: lexing, parsing, semantic validation, and
//! persistence failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DslError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("semantic error: {}", .messages.join("; "))]
    Semantic { messages: Vec<String> },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no rule found with id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, DslError>;
