//! Snippet id generation: `<snippet_type>_<start_line>_<8-char content hash>`.

use codeloom_core::SnippetType;
use codeloom_utils::short_hash_hex;

/// A pure function of `(snippet_type, start_line, content)`, stable across runs and
/// platforms — used both to stamp new snippets and, by the engine, to dedup them.
#[must_use]
pub fn snippet_id(snippet_type: SnippetType, start_line: usize, content: &str) -> String {
    format!(
        "{}_{}_{}",
        snippet_type.as_str(),
        start_line,
        short_hash_hex(content.as_bytes())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_stable_for_identical_input() {
        let a = snippet_id(SnippetType::ControlStructure, 3, "if (x) { y(); }");
        let b = snippet_id(SnippetType::ControlStructure, 3, "if (x) { y(); }");
        assert_eq!(a, b);
    }

    #[test]
    fn differs_by_start_line() {
        let a = snippet_id(SnippetType::ControlStructure, 3, "if (x) { y(); }");
        let b = snippet_id(SnippetType::ControlStructure, 4, "if (x) { y(); }");
        assert_ne!(a, b);
    }
}
