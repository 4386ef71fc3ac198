//! `codeloom dsl validate|compile`.

use std::fs;

use anyhow::{Context, Result};
use codeloom_dsl::{validate, DslError, DslStore};

use crate::cli::DslAction;
use crate::exit;

pub fn run(action: &DslAction) -> Result<i32> {
    match action {
        DslAction::Validate { file } => validate_file(file),
        DslAction::Compile {
            file,
            rule_id,
            storage_root,
        } => compile_file(file, rule_id, storage_root),
    }
}

fn validate_file(file: &std::path::Path) -> Result<i32> {
    let source = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let ast = match parse_source(&source) {
        Ok(ast) => ast,
        Err(code) => return Ok(code),
    };

    let outcome = validate(&ast);
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    if outcome.is_valid() {
        println!("valid");
        Ok(exit::SUCCESS)
    } else {
        for error in &outcome.errors {
            eprintln!("error: {error}");
        }
        Ok(exit::VALIDATION_ERROR)
    }
}

fn compile_file(file: &std::path::Path, rule_id: &str, storage_root: &std::path::Path) -> Result<i32> {
    let source = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let ast = match parse_source(&source) {
        Ok(ast) => ast,
        Err(code) => return Ok(code),
    };

    let store = DslStore::new(storage_root);
    match store.save(rule_id, &ast) {
        Ok(stored) => {
            println!("compiled {} as version {}", stored.id, stored.version);
            Ok(exit::SUCCESS)
        }
        Err(DslError::Semantic { messages }) => {
            for message in messages {
                eprintln!("error: {message}");
            }
            Ok(exit::VALIDATION_ERROR)
        }
        Err(other) => Err(other.into()),
    }
}

/// Lexes and parses `source`; semantic validation is the caller's job (so `validate`
/// can report warnings even on an AST it then also rejects). Syntax errors map to the
/// parse-error exit code directly.
fn parse_source(source: &str) -> std::result::Result<codeloom_dsl::RuleAst, i32> {
    let tokens = match codeloom_dsl::lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{err}");
            return Err(exit::PARSE_ERROR);
        }
    };
    match codeloom_dsl::parser::parse(&tokens) {
        Ok(ast) => Ok(ast),
        Err(err) => {
            eprintln!("{err}");
            Err(exit::PARSE_ERROR)
        }
    }
}
