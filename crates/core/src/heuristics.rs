//! Regex-heavy approximations for side effects, language features, and snippet shape.
//!
//! Kept behind one module so they can later be swapped for grammar-aware predicates
//! without touching any rule or the validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::snippet::{LanguageFeatures, SnippetType};

static CONTROL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(if|else|for|while|do|switch|case|try|catch|finally)\b").unwrap()
});
static LOGICAL_OP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&&|\|\|").unwrap());
static BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[{}\[\]()]").unwrap());
static CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z_$][\w$]*\s*\(").unwrap());
static TRIVIAL_CALL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Math|console|print|len|str|int)\b").unwrap());

static ASYNC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\basync\b|\bawait\b").unwrap());
static GENERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\byield\b|function\s*\*|\*\s*\w+\s*\(").unwrap());
static DESTRUCTURING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(const|let|var)?\s*[\{\[][\w\s,:.=]+[\}\]]\s*=").unwrap());
static SPREAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\.\.").unwrap());
static TEMPLATE_INTERP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*\$\{[^}]+\}").unwrap());

static INCREMENT_DECREMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+\+|--").unwrap());
static MUTATING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(delete|new|throw)\b").unwrap());
static PROPERTY_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w)\]]\.\w+(\.\w+)*\s*=[^=]").unwrap());
static GLOBAL_WRITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(console|window|global|document|process|module|exports)\b\s*\.\s*\w+\s*=").unwrap()
});
static BARE_REASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*[A-Za-z_$][\w$]*\s*(\+|-|\*|/|%)?=[^=]").unwrap()
});
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(const|let|var)\s+[A-Za-z_]").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static HASH_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[^\n]*").unwrap());

static CONTROL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(if|for|while|switch|try|catch|finally)\b").unwrap());
static ERROR_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(try|catch|finally|throw)\b").unwrap());

/// Strips `//`, `/* */`, and `#` comments; used for "is this comments-only" checks.
pub fn strip_comments(content: &str) -> String {
    let without_block = BLOCK_COMMENT.replace_all(content, "");
    let without_line = LINE_COMMENT.replace_all(&without_block, "");
    HASH_COMMENT.replace_all(&without_line, "").into_owned()
}

/// `complexity = 1 + control-keywords + logical-ops + 0.5*brackets + 0.3*non-trivial calls`
///, rounded to the nearest integer and floored at 1.
pub fn base_complexity(content: &str) -> u32 {
    let control = CONTROL_KEYWORD.find_iter(content).count() as f64;
    let logical = LOGICAL_OP.find_iter(content).count() as f64;
    let brackets = BRACKET.find_iter(content).count() as f64;
    let calls = CALL
        .find_iter(content)
        .filter(|m| !TRIVIAL_CALL_PREFIX.is_match(m.as_str()))
        .count() as f64;

    let score = 1.0 + control + logical + 0.5 * brackets + 0.3 * calls;
    (score.round() as u32).max(1)
}

pub fn language_features(content: &str) -> LanguageFeatures {
    LanguageFeatures {
        uses_async: ASYNC.is_match(content),
        uses_generators: GENERATOR.is_match(content),
        uses_destructuring: DESTRUCTURING.is_match(content),
        uses_spread: SPREAD.is_match(content),
        uses_template_literals: TEMPLATE_INTERP.is_match(content),
    }
}

/// Whether the snippet's text shows any of the fixed side-effect patterns, excluding
/// the whitelisted pure calls (`Math.*`, `.map(...)` and friends).
pub fn has_side_effects(content: &str) -> bool {
    if INCREMENT_DECREMENT.is_match(content)
        || MUTATING_KEYWORD.is_match(content)
        || GLOBAL_WRITE.is_match(content)
    {
        return true;
    }
    if PROPERTY_ASSIGN.is_match(content) {
        return true;
    }
    // A bare reassignment is only a side effect if it isn't actually a fresh local
    // declaration initialized from a whitelisted pure call (`const doubled = xs.map(...)`).
    BARE_REASSIGN.is_match(content) && !DECLARATION.is_match(content)
}

/// `(I5)`: does `content` match the shape predicate for `snippet_type`?
pub fn matches_shape(snippet_type: SnippetType, content: &str) -> bool {
    match snippet_type {
        SnippetType::ControlStructure => CONTROL_SHAPE.is_match(content),
        SnippetType::ErrorHandling => ERROR_SHAPE.is_match(content),
        _ => true,
    }
}

/// Count of non-blank lines, used by several trivia/complexity thresholds.
pub fn non_blank_line_count(content: &str) -> usize {
    content.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Number of distinct word-ish tokens, used by the validator's "diversity" check.
pub fn unique_token_count(content: &str) -> usize {
    static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap());
    let mut set = std::collections::HashSet::new();
    for m in TOKEN.find_iter(content) {
        set.insert(m.as_str());
    }
    set.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_is_never_below_one() {
        assert_eq!(base_complexity(""), 1);
        assert!(base_complexity("if (x && y) { f(); g(); }") >= 2);
    }

    #[test]
    fn detects_async_and_destructuring() {
        let feats = language_features("const { a, b } = await fetchThing();");
        assert!(feats.uses_async);
        assert!(feats.uses_destructuring);
    }

    #[test]
    fn whitelists_pure_map_calls() {
        assert!(!has_side_effects("const doubled = xs.map(x => x * 2);"));
        assert!(has_side_effects("window.location = '/home';"));
        assert!(has_side_effects("count++;"));
    }

    #[test]
    fn strips_comments_fully() {
        assert_eq!(strip_comments("// just a comment").trim(), "");
        assert_eq!(strip_comments("/* block */").trim(), "");
    }
}
