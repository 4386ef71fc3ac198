//! `codeloom parse`: parse a file and report success/failure.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use codeloom_core::{Chunk, CoreConfig, Language};
use codeloom_parser::ParserCore;
use codeloom_rules::extract_chunks;
use serde::Serialize;

use crate::exit;

#[derive(Serialize)]
struct ParseSummary {
    language: Language,
    success: bool,
    error: Option<String>,
    parse_time_ms: u64,
    partial: bool,
    chunks: Vec<Chunk>,
}

pub fn run(file: &Path, language: Option<Language>, config: &CoreConfig) -> Result<i32> {
    let Some(language) = language.or_else(|| Language::from_path(file)) else {
        eprintln!("unsupported language: could not infer a grammar from {}", file.display());
        return Ok(exit::UNSUPPORTED_LANGUAGE);
    };

    let bytes = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let parser = ParserCore::new(config);
    let result = parser.parse(&bytes, language);

    tracing::debug!(file = %file.display(), language = %language, success = result.success, "parsed file");

    let chunks = result
        .ast
        .as_ref()
        .map(|ast| {
            let source = String::from_utf8_lossy(&bytes);
            extract_chunks(ast, &source, language)
        })
        .unwrap_or_default();

    let summary = ParseSummary {
        language: result.language,
        success: result.success,
        error: result.error.clone(),
        parse_time_ms: result.parse_time_ms,
        partial: result.partial,
        chunks,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if result.success {
        return Ok(exit::SUCCESS);
    }
    if result.error.as_deref().is_some_and(|e| e.contains("resource limit")) {
        return Ok(exit::RESOURCE_LIMIT_EXCEEDED);
    }
    Ok(exit::PARSE_ERROR)
}
