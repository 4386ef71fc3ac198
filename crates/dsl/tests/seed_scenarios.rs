//! Integration test for the custom-rule DSL's round trip: source text through the
//! lexer, parser, compiler, and on-disk persistence, then back out again.

use codeloom_dsl::{compile_source, CompiledRule, DslStore};
use codeloom_rules::Rule;

const RULE_SOURCE: &str = r#"
rule "AsyncFns" {
  description: "matches async function declarations"
  target: "function_declaration"
  condition { contentPattern: contains("async")
              complexity: greaterThan(2) }
  action { type: extract
           parameters: { includeComments: true } }
}
"#;

#[test]
fn dsl_rule_round_trips_through_compile_and_disk() {
    let ast = compile_source(RULE_SOURCE).expect("well-formed rule source compiles");
    assert_eq!(ast.name, "AsyncFns");
    assert_eq!(ast.target.as_deref(), Some("function_declaration"));

    let compiled = CompiledRule::compile("async_fns", ast.clone());
    assert_eq!(compiled.name(), "AsyncFns");
    assert_eq!(compiled.supported_node_kinds(codeloom_core::Language::JavaScript), ["function_declaration"]);

    let dir = tempfile::tempdir().unwrap();
    let store = DslStore::new(dir.path());
    let stored = store.save("async_fns", &ast).unwrap();
    assert_eq!(stored.version, "1.0.0");

    let loaded = store.load("async_fns").unwrap();
    assert_eq!(loaded.ast, ast);

    let updated = store.save("async_fns", &ast).unwrap();
    assert_eq!(updated.version, "1.0.1");
    assert!(dir.path().join("custom-rules/async_fns_v1.0.0.json").exists());
}
