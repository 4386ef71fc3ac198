//! Per-language tree-sitter grammars.

use codeloom_core::Language;
use tree_sitter::Language as TsLanguage;

/// Resolves the compiled-in tree-sitter grammar for a [`Language`].
///
/// TypeScript and TSX share a grammar crate but expose distinct `LANGUAGE` constants;
/// `.tsx` files are not modeled as a separate [`Language`] variant, so plain TypeScript
/// grammar is used for both (JSX-flavored TS still parses, just without the TSX-only
/// node kinds).
pub fn ts_language(language: Language) -> TsLanguage {
    match language {
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
        Language::Go => tree_sitter_go::LANGUAGE.into(),
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        Language::C => tree_sitter_c::LANGUAGE.into(),
        Language::Markdown => tree_sitter_md::LANGUAGE.into(),
    }
}
