//! Bounded LRU cache of parse results, fingerprinted by content hash and language.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use codeloom_core::{Language, ParseResult};
use codeloom_utils::hash_bytes;
use lru::LruCache;

/// `{hits, misses, hit_rate}` reporting for a [`ParseCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    #[must_use]
    pub fn hit_rate(self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Maps `fingerprint(source, language) -> ParseResult` with LRU eviction.
///
/// Guarded by a single `Mutex` rather than sharded (e.g. `dashmap`): the cache is
/// read-mostly but eviction reorders the LRU list on every hit, so a lock-free
/// read path wouldn't buy much and `lru::LruCache` has no concurrent variant.
pub struct ParseCache {
    inner: Mutex<LruCache<u64, ParseResult>>,
    hits: std::sync::atomic::AtomicU64,
    misses: std::sync::atomic::AtomicU64,
}

impl ParseCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            hits: std::sync::atomic::AtomicU64::new(0),
            misses: std::sync::atomic::AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn fingerprint(source: &[u8], language: Language) -> u64 {
        let mut buf = Vec::with_capacity(source.len() + language.as_str().len());
        buf.extend_from_slice(language.as_str().as_bytes());
        buf.push(0);
        buf.extend_from_slice(source);
        hash_bytes(&buf)
    }

    pub fn get(&self, fingerprint: u64) -> Option<ParseResult> {
        use std::sync::atomic::Ordering;
        let mut guard = self.inner.lock().expect("parse cache mutex poisoned");
        let hit = guard.get(&fingerprint).cloned();
        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    pub fn insert(&self, fingerprint: u64, result: ParseResult) {
        let mut guard = self.inner.lock().expect("parse cache mutex poisoned");
        guard.put(fingerprint, result);
    }

    pub fn clear(&self) {
        let mut guard = self.inner.lock().expect("parse cache mutex poisoned");
        guard.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        use std::sync::atomic::Ordering;
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeloom_core::Ast;

    #[test]
    fn evicts_oldest_entry_past_capacity() {
        let cache = ParseCache::new(1);
        let a = ParseCache::fingerprint(b"a", Language::Rust);
        let b = ParseCache::fingerprint(b"b", Language::Rust);
        cache.insert(a, ParseResult::success(Language::Rust, Ast::new(), 0));
        cache.insert(b, ParseResult::success(Language::Rust, Ast::new(), 0));
        assert!(cache.get(a).is_none());
        assert!(cache.get(b).is_some());
    }

    #[test]
    fn reports_hit_rate() {
        let cache = ParseCache::new(4);
        let fp = ParseCache::fingerprint(b"same", Language::Python);
        assert!(cache.get(fp).is_none());
        cache.insert(fp, ParseResult::success(Language::Python, Ast::new(), 0));
        assert!(cache.get(fp).is_some());
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }
}
