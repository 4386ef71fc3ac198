//! Error taxonomy for the codeloom core.

use thiserror::Error;

/// Errors that can surface out of the parsing/extraction pipeline.
///
/// Parse failures, resource limits, rule-internal failures, and validation rejections are
/// mostly *contained* rather than propagated — they show up as fields on
/// `ParseResult`/logged events, not as `Err` returns from the top-level pipeline. This enum
/// exists for the cases callers do need to handle explicitly (language lookup, DSL
/// compilation).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("source exceeds the {limit}-byte resource limit ({actual} bytes)")]
    ResourceLimit { limit: usize, actual: usize },

    #[error("source is not valid UTF-8")]
    InvalidUtf8,

    #[error("source looks like binary data (NUL byte in first 8 KiB)")]
    BinaryInput,

    #[error("rule {rule} failed on node kind {node_kind:?}: {message}")]
    RuleInternal {
        rule: String,
        node_kind: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
