//! Basic parsing example demonstrating codeloom's Parser Core and Rule Engine.
//!
//! This example parses a small Rust snippet, walks the resulting AST through the
//! built-in rule set, and prints the snippets the Rule Engine extracted.

use codeloom_core::{CoreConfig, Language, ValidatorProfile};
use codeloom_parser::ParserCore;
use codeloom_rules::{RuleEngine, RuleRegistry, SelectionPolicy};

fn main() {
    println!("codeloom basic parsing example");
    println!("===============================");

    let config = CoreConfig::default();
    let parser = ParserCore::new(&config);

    let source = r#"
fn add_numbers(a: i32, b: i32) -> i32 {
    a + b
}

fn classify(n: i32) -> &'static str {
    if n > 0 && n % 2 == 0 {
        "positive even"
    } else if n > 0 {
        "positive odd"
    } else {
        "non-positive"
    }
}
"#;

    println!("Parsing Rust source...\n");
    let result = parser.parse(source.as_bytes(), Language::Rust);

    if !result.success {
        println!("Parsing failed: {}", result.error.unwrap_or_default());
        return;
    }
    println!("Parsed in {}ms", result.parse_time_ms);

    let ast = result.ast.expect("success implies an AST");
    let registry = RuleRegistry::new();
    let engine = RuleEngine::new(&registry);
    let snippets = engine.extract(
        &ast,
        source,
        Language::Rust,
        &SelectionPolicy::Comprehensive,
        ValidatorProfile::TestDevelopment,
        &config,
    );

    println!("\nExtracted {} snippet(s):", snippets.len());
    for snippet in &snippets {
        println!(
            "  - {:?} @ lines {}-{} ({})",
            snippet.snippet_metadata.snippet_type, snippet.start_line, snippet.end_line, snippet.id
        );
    }

    let stats = parser.cache_stats();
    println!("\nParse cache: {} hits, {} misses", stats.hits, stats.misses);
}
