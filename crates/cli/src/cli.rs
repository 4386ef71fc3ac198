//! `clap` derive surface for the `codeloom` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use codeloom_core::Language;

#[derive(Debug, Parser)]
#[command(name = "codeloom", version, about = "Multi-language snippet extraction over tree-sitter")]
pub struct Cli {
    /// Path to a TOML config file; CLI flags override values it sets.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit debug-level logs (rule-internal warnings, validator rejections).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a source file and report success/failure, without extracting snippets.
    Parse {
        file: PathBuf,
        /// Language tag; inferred from the file extension when omitted.
        #[arg(long)]
        language: Option<Language>,
    },
    /// Parse a source file and extract snippets.
    Extract {
        file: PathBuf,
        #[arg(long)]
        language: Option<Language>,
        /// Rule selection: `comprehensive` (default), a language tag, `focus:<area>`,
        /// or `framework:<tag>`.
        #[arg(long, default_value = "comprehensive")]
        policy: String,
        /// Validator strictness: `production` (default) or `test-development`.
        #[arg(long, default_value = "production")]
        profile: String,
        /// Print parse-cache stats to stderr after extraction.
        #[arg(long)]
        stats: bool,
    },
    /// Inspect the built-in rule registry.
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
    /// Work with the Custom-Rule DSL.
    Dsl {
        #[command(subcommand)]
        action: DslAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum RulesAction {
    /// List the rules a selection policy would run.
    List {
        #[arg(long, default_value = "comprehensive")]
        policy: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DslAction {
    /// Lex, parse, and semantically validate a DSL rule file.
    Validate { file: PathBuf },
    /// Compile a DSL rule file and store it under `--storage-root`.
    Compile {
        file: PathBuf,
        #[arg(long, default_value = "rule_id")]
        rule_id: String,
        #[arg(long, default_value = ".")]
        storage_root: PathBuf,
    },
}
