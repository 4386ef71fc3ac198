//! Per-language "does this look like real logic, not boilerplate" patterns.
//!
//! Used only by the `Production` validator profile; `TestDevelopment` skips straight to
//! the minimal token-presence check.

use std::sync::LazyLock;

use codeloom_core::Language;
use regex::Regex;

static GENERIC_LOGIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(if|for|while|switch|try|catch|return|function|class|def|func|fn)\b").unwrap()
});
static PYTHON_LOGIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(def|class|if|elif|for|while|try|except|with|lambda)\b").unwrap());
static GO_LOGIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(func|go|select|chan|if|for|switch|defer)\b").unwrap());
static JAVA_LOGIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(public|private|protected|class|interface|if|for|while|switch|try|catch|stream)\b").unwrap()
});
static RUST_LOGIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(fn|impl|struct|enum|trait|match|if|for|while|loop)\b").unwrap()
});

/// Whether `content` contains at least one construct recognizable as real logic in
/// `language`, as opposed to e.g. a bare literal or a declaration with no control flow.
pub fn has_meaningful_logic(language: Language, content: &str) -> bool {
    let pattern = match language {
        Language::Python => &*PYTHON_LOGIC,
        Language::Go => &*GO_LOGIC,
        Language::Java => &*JAVA_LOGIC,
        Language::Rust => &*RUST_LOGIC,
        Language::JavaScript | Language::TypeScript | Language::Cpp | Language::C | Language::Markdown => {
            &*GENERIC_LOGIC
        }
    };
    pattern.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_language_specific_logic() {
        assert!(has_meaningful_logic(Language::Python, "def f():\n    return 1"));
        assert!(has_meaningful_logic(Language::Go, "go func() { ch <- 1 }()"));
        assert!(!has_meaningful_logic(Language::Python, "x = 1"));
    }
}
