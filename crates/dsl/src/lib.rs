//! Custom-Rule DSL: lexer → parser → semantic validator → compiler → JSON persistence
//! for user-authored extraction rules.
//!
//! A DSL rule's `extract` action compiles to a [`CompiledRule`] that implements the
//! same [`codeloom_rules::Rule`] trait as the built-ins, so the Rule Engine dispatches
//! both identically. `highlight`/`report` actions run on a separate diagnostic channel
//! ([`DslDiagnostic`]) rather than emitting snippets.

pub mod ast;
pub mod compiler;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod persistence;
pub mod validator;

pub use ast::RuleAst;
pub use compiler::CompiledRule;
pub use diagnostics::DslDiagnostic;
pub use error::{DslError, Result};
pub use persistence::{DslStore, StoredRule};
pub use validator::{validate, ValidationOutcome};

/// Lexes, parses, and semantically validates `source`, returning the parsed
/// [`RuleAst`] if it's well-formed (validation errors aggregate into one [`DslError`]).
pub fn compile_source(source: &str) -> Result<RuleAst> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(&tokens)?;
    let outcome = validate(&ast);
    if !outcome.is_valid() {
        return Err(DslError::Semantic { messages: outcome.errors });
    }
    Ok(ast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeloom_rules::Rule;

    #[test]
    fn compiles_the_example_rule_end_to_end() {
        let source = r#"
            rule "AsyncFns" {
              description: "matches async functions"
              target: "function_declaration"
              condition { contentPattern: "async"
                          complexity: greaterThan(5) }
              action { type: extract
                       parameters: { includeComments: true } }
            }
        "#;
        let ast = compile_source(source).unwrap();
        let rule = CompiledRule::compile("async_fns", ast);
        assert_eq!(rule.name(), "AsyncFns");
    }
}
