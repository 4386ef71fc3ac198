//! `codeloom extract`: parse a file and run the Rule Engine over it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use codeloom_core::{Chunk, CoreConfig, Language, Snippet, ValidatorProfile};
use codeloom_parser::ParserCore;
use codeloom_rules::{extract_chunks, RuleEngine, RuleRegistry, SelectionPolicy};
use serde::Serialize;

use crate::exit;

/// The output contract: every structural chunk alongside the snippets the Rule
/// Engine found in them.
#[derive(Serialize)]
struct ExtractOutput {
    chunks: Vec<Chunk>,
    snippets: Vec<Snippet>,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &Path,
    language: Option<Language>,
    policy: &SelectionPolicy,
    profile: ValidatorProfile,
    stats: bool,
    config: &CoreConfig,
) -> Result<i32> {
    let Some(language) = language.or_else(|| Language::from_path(file)) else {
        eprintln!("unsupported language: could not infer a grammar from {}", file.display());
        return Ok(exit::UNSUPPORTED_LANGUAGE);
    };

    let bytes = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let parser = ParserCore::new(config);
    let result = parser.parse(&bytes, language);
    tracing::debug!(file = %file.display(), language = %language, success = result.success, "parsed file");

    let Some(ast) = result.ast else {
        eprintln!("{}", result.error.as_deref().unwrap_or("parse failed"));
        return Ok(if result.partial {
            exit::RESOURCE_LIMIT_EXCEEDED
        } else {
            exit::PARSE_ERROR
        });
    };

    let source = String::from_utf8_lossy(&bytes);
    let chunks = extract_chunks(&ast, &source, language);
    let registry = RuleRegistry::new();
    let engine = RuleEngine::new(&registry);
    let snippets = engine.extract(&ast, &source, language, policy, profile, config);

    println!("{}", serde_json::to_string_pretty(&ExtractOutput { chunks, snippets })?);

    if stats {
        let cache_stats = parser.cache_stats();
        tracing::info!(
            hits = cache_stats.hits,
            misses = cache_stats.misses,
            hit_rate = cache_stats.hit_rate(),
            "parse cache stats"
        );
        eprintln!(
            "cache: {} hits, {} misses, {:.2} hit rate",
            cache_stats.hits,
            cache_stats.misses,
            cache_stats.hit_rate()
        );
    }

    Ok(exit::SUCCESS)
}
