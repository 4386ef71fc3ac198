//! The Parser Core: `parse(source_bytes, language) -> ParseResult`, cached and bounded.

use std::time::Instant;

use codeloom_core::{CoreConfig, Language, ParseResult};
use tree_sitter::Parser as TsParser;

use crate::builder::build_ast;
use crate::cache::{CacheStats, ParseCache};
use crate::grammar::ts_language;

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const BINARY_SNIFF_WINDOW: usize = 8 * 1024;

/// Owns the parse cache and resource bounds; safe to share across worker threads (no
/// interior mutability beyond the cache's own mutex, no per-call allocation of grammars).
pub struct ParserCore {
    cache: ParseCache,
    max_file_size_bytes: usize,
}

impl ParserCore {
    #[must_use]
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            cache: ParseCache::new(config.cache_capacity),
            max_file_size_bytes: config.max_file_size_bytes,
        }
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Parses `source_bytes` as `language`, never returning an `Err`: failures are
    /// reported as `ParseResult { success: false, error: Some(_), .. }`.
    #[tracing::instrument(skip(self, source_bytes), fields(language = %language, bytes = source_bytes.len()))]
    pub fn parse(&self, source_bytes: &[u8], language: Language) -> ParseResult {
        let start = Instant::now();

        if source_bytes.len() > self.max_file_size_bytes {
            tracing::warn!(
                limit = self.max_file_size_bytes,
                actual = source_bytes.len(),
                "source exceeds configured size limit"
            );
            return ParseResult::failure(
                language,
                format!(
                    "source exceeds the {}-byte resource limit ({} bytes)",
                    self.max_file_size_bytes,
                    source_bytes.len()
                ),
                elapsed_ms(start),
            );
        }

        let sniff_len = source_bytes.len().min(BINARY_SNIFF_WINDOW);
        if source_bytes[..sniff_len].contains(&0) {
            return ParseResult::failure(language, "binary input detected", elapsed_ms(start));
        }

        let stripped = source_bytes.strip_prefix(BOM).unwrap_or(source_bytes);
        let Ok(text) = std::str::from_utf8(stripped) else {
            return ParseResult::failure(language, "source is not valid UTF-8", elapsed_ms(start));
        };

        let fingerprint = ParseCache::fingerprint(stripped, language);
        if let Some(cached) = self.cache.get(fingerprint) {
            tracing::debug!("parse cache hit");
            return cached;
        }

        let mut ts_parser = TsParser::new();
        if let Err(err) = ts_parser.set_language(&ts_language(language)) {
            return ParseResult::failure(
                language,
                format!("failed to load grammar: {err}"),
                elapsed_ms(start),
            );
        }

        let Some(tree) = ts_parser.parse(text, None) else {
            return ParseResult::failure(language, "tree-sitter produced no tree", elapsed_ms(start));
        };

        let ast = build_ast(&tree, text.as_bytes());
        let result = ParseResult::success(language, ast, elapsed_ms(start));
        self.cache.insert(fingerprint, result.clone());
        result
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis().try_into().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> ParserCore {
        ParserCore::new(&CoreConfig::default())
    }

    #[test]
    fn parses_valid_source() {
        let core = core();
        let result = core.parse(b"def f(x):\n    return x + 1\n", Language::Python);
        assert!(result.success);
        assert!(result.ast.is_some());
        assert!(result.error.is_none());
    }

    #[test]
    fn refuses_binary_input() {
        let core = core();
        let mut bytes = vec![b'a'; 10];
        bytes.push(0);
        let result = core.parse(&bytes, Language::JavaScript);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("binary input detected"));
    }

    #[test]
    fn refuses_oversized_input() {
        let mut config = CoreConfig::default();
        config.max_file_size_bytes = 4;
        let core = ParserCore::new(&config);
        let result = core.parse(b"const x = 1;", Language::JavaScript);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("resource limit"));
    }

    #[test]
    fn strips_bom_before_parsing() {
        let core = core();
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(b"const x = 1;");
        let result = core.parse(&bytes, Language::JavaScript);
        assert!(result.success);
    }

    #[test]
    fn repeated_parse_hits_cache() {
        let core = core();
        let source = b"package main\nfunc main() {}\n";
        core.parse(source, Language::Go);
        core.parse(source, Language::Go);
        let stats = core.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}
