//! Size, shape, and (in `Production`) meaningful-logic / diversity / complexity checks.

use codeloom_core::heuristics::{non_blank_line_count, strip_comments, unique_token_count};
use codeloom_core::{Snippet, SnippetType, ValidatorProfile};

use crate::meaningful_logic::has_meaningful_logic;

const MIN_CONTENT_LEN: usize = 5;
const MAX_CONTENT_LEN: usize = 1500;
const MIN_NON_TRIVIAL_CHARS: usize = 3;
const MIN_DIVERSITY_TOKENS: usize = 3;
const MIN_COMPLEXITY_LINES: usize = 3;
const MIN_COMPLEXITY_CHARS: usize = 30;

/// Per-type floor on non-blank lines used by the `Production` "not too simple" check.
/// Types whose whole point is to be a compact expression (template literals, generics,
/// decorators, …) aren't held to it; types that exist to capture *control flow* are.
fn type_min_lines(snippet_type: SnippetType) -> usize {
    match snippet_type {
        SnippetType::ControlStructure | SnippetType::ErrorHandling | SnippetType::LogicBlock => 2,
        _ => 1,
    }
}

/// Stateless snippet validator. Holds no data of its own; `ValidatorProfile` is passed
/// explicitly by the caller at each call, never read from the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnippetValidator;

impl SnippetValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn is_valid(&self, snippet: &Snippet, profile: ValidatorProfile) -> bool {
        self.rejection_reason(snippet, profile).is_none()
    }

    /// Same check as [`Self::is_valid`], but returns *why* a snippet was rejected —
    /// used by the CLI's `--verbose` extract output and by tests.
    #[must_use]
    pub fn rejection_reason(&self, snippet: &Snippet, profile: ValidatorProfile) -> Option<&'static str> {
        let content = snippet.content.as_str();

        if content.len() < MIN_CONTENT_LEN {
            return Some("content shorter than the minimum length");
        }
        if content.len() > MAX_CONTENT_LEN {
            return Some("content longer than the maximum length");
        }

        let stripped_brackets: String = content
            .chars()
            .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '(' | ')') && !c.is_whitespace())
            .collect();
        if stripped_brackets.len() < MIN_NON_TRIVIAL_CHARS {
            return Some("content is only brackets and whitespace");
        }

        if strip_comments(content).trim().is_empty() {
            return Some("content is comments-only");
        }

        if !snippet.matches_shape() {
            return Some("content does not match its snippet type's shape");
        }

        match profile {
            ValidatorProfile::TestDevelopment => {
                if unique_token_count(content) == 0 {
                    return Some("content has no tokens");
                }
            }
            ValidatorProfile::Production => {
                if !has_meaningful_logic(snippet.language, content) {
                    return Some("content has no recognizable logic construct");
                }
                if non_blank_line_count(content) < type_min_lines(snippet.snippet_metadata.snippet_type) {
                    return Some("content is too simple for its snippet type");
                }
                if unique_token_count(content) < MIN_DIVERSITY_TOKENS {
                    return Some("content lacks token diversity");
                }
                let complex_enough = non_blank_line_count(content) >= MIN_COMPLEXITY_LINES
                    && content.len() >= MIN_COMPLEXITY_CHARS;
                if !complex_enough {
                    return Some("content below the complexity threshold");
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeloom_core::{
        ChunkMetadata, ContextInfo, Language, LanguageFeatures, Snippet, SnippetDetail, SnippetMetadata,
    };

    fn snippet(snippet_type: SnippetType, content: &str) -> Snippet {
        Snippet {
            id: "test_1_deadbeef".to_string(),
            content: content.to_string(),
            start_line: 1,
            end_line: content.lines().count().max(1),
            start_byte: 0,
            end_byte: content.len(),
            language: Language::Python,
            name: None,
            chunk_metadata: ChunkMetadata::default(),
            snippet_metadata: SnippetMetadata {
                snippet_type,
                context_info: ContextInfo::default(),
                language_features: LanguageFeatures::default(),
                complexity: 1,
                is_standalone: true,
                has_side_effects: false,
                detail: SnippetDetail::None,
            },
        }
    }

    #[test]
    fn rejects_too_short_content() {
        let v = SnippetValidator::new();
        let s = snippet(SnippetType::LogicBlock, "x=1");
        assert!(!v.is_valid(&s, ValidatorProfile::TestDevelopment));
    }

    #[test]
    fn rejects_comments_only() {
        let v = SnippetValidator::new();
        let s = snippet(SnippetType::LogicBlock, "# just a comment, nothing else here");
        assert!(!v.is_valid(&s, ValidatorProfile::TestDevelopment));
    }

    #[test]
    fn rejects_shape_mismatch_for_control_structure() {
        let v = SnippetValidator::new();
        let s = snippet(SnippetType::ControlStructure, "x = some_value + 1234567");
        assert!(!v.is_valid(&s, ValidatorProfile::TestDevelopment));
    }

    #[test]
    fn test_development_profile_accepts_simple_logic() {
        let v = SnippetValidator::new();
        let s = snippet(SnippetType::LogicBlock, "if x:\n    return x");
        assert!(v.is_valid(&s, ValidatorProfile::TestDevelopment));
    }

    #[test]
    fn production_profile_rejects_low_diversity() {
        let v = SnippetValidator::new();
        let s = snippet(SnippetType::LogicBlock, "if a: a a a a a a a a a a a a a a a a a");
        assert!(!v.is_valid(&s, ValidatorProfile::Production));
    }

    #[test]
    fn production_profile_accepts_substantial_logic() {
        let v = SnippetValidator::new();
        let s = snippet(
            SnippetType::LogicBlock,
            "if user.is_authenticated and user.has_permission('edit'):\n    document.save()\n    return True",
        );
        assert!(v.is_valid(&s, ValidatorProfile::Production));
    }
}
