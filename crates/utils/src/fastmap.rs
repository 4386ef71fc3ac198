//! `FastMap`/`FastSet`: concurrent-friendly map and set aliases.
//!
//! The parse cache (§5) is the one piece of state the core shares across worker threads,
//! so its backing map needs to be safely mutable from multiple callers without a
//! caller-visible lock. [`dashmap`] gives us that directly.

pub type FastMap<K, V> = dashmap::DashMap<K, V>;
pub type FastSet<T> = dashmap::DashSet<T>;
