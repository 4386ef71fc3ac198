//! Integration tests for the extraction pipeline's seed scenarios: one per language
//! feature the Rule Engine is expected to recognize end to end.

use codeloom_core::{Ast, CoreConfig, Language, SnippetType, ValidatorProfile};
use codeloom_parser::{build_ast, ts_language};
use codeloom_rules::{RuleEngine, RuleRegistry, SelectionPolicy};
use tree_sitter::Parser;

fn parse(source: &str, language: Language) -> Ast {
    let mut parser = Parser::new();
    parser.set_language(&ts_language(language)).unwrap();
    let tree = parser.parse(source, None).unwrap();
    build_ast(&tree, source.as_bytes())
}

fn extract(source: &str, language: Language) -> Vec<codeloom_core::Snippet> {
    let ast = parse(source, language);
    let registry = RuleRegistry::new();
    let engine = RuleEngine::new(&registry);
    engine.extract(
        &ast,
        source,
        language,
        &SelectionPolicy::Comprehensive,
        ValidatorProfile::TestDevelopment,
        &CoreConfig::default(),
    )
}

#[test]
fn js_control_structure_is_extracted() {
    let source = "function run(items) {\n  if (items.length > 0 && items[0].active) {\n    process(items);\n  }\n}";
    let snippets = extract(source, Language::JavaScript);
    assert!(snippets
        .iter()
        .any(|s| s.snippet_metadata.snippet_type == SnippetType::ControlStructure));
}

#[test]
fn js_function_call_chain_is_extracted() {
    let source = "async function run() {\n  const result = await fetchData()\n    .then(r => r.json())\n    .catch(onError);\n}";
    let snippets = extract(source, Language::JavaScript);
    assert!(snippets
        .iter()
        .any(|s| s.snippet_metadata.snippet_type == SnippetType::FunctionCallChain));
}

#[test]
fn python_comprehension_is_extracted() {
    let source = "def evens(values):\n    return [v * 2 for v in values if v % 2 == 0]\n";
    let snippets = extract(source, Language::Python);
    assert!(snippets
        .iter()
        .any(|s| s.snippet_metadata.snippet_type == SnippetType::Comprehension));
}

#[test]
fn go_goroutine_is_extracted() {
    let source = "func run(ch chan int) {\n\tgo func() {\n\t\tch <- 1\n\t}()\n\tselect {\n\tcase v := <-ch:\n\t\tfmt.Println(v)\n\t}\n}";
    let snippets = extract(source, Language::Go);
    assert!(snippets
        .iter()
        .any(|s| s.snippet_metadata.snippet_type == SnippetType::Goroutine));
}

#[test]
fn identical_snippets_deduplicate_by_id() {
    let source = "if (a && b) {\n  doThing();\n}";
    let snippets = extract(source, Language::JavaScript);
    let mut ids: Vec<_> = snippets.iter().map(|s| s.id.clone()).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(before, ids.len());
}

#[test]
fn snippet_content_matches_source_byte_range() {
    let source = "function run(items) {\n  if (items.length > 0) {\n    process(items);\n  }\n}";
    let snippets = extract(source, Language::JavaScript);
    assert!(!snippets.is_empty());
    for snippet in &snippets {
        assert_eq!(&source[snippet.start_byte..snippet.end_byte], snippet.content);
        assert!(snippet.start_line <= snippet.end_line);
        assert!(snippet.content.len() >= 5 && snippet.content.len() <= 1500);
    }
}
