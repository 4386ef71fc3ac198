//! Subcommand handlers. Each returns the process exit code defined for the CLI.

pub mod dsl;
pub mod extract;
pub mod parse;
pub mod rules;

use anyhow::{bail, Result};
use codeloom_core::{FrameworkTag, Language, ValidatorProfile};
use codeloom_rules::{FocusArea, SelectionPolicy};

use crate::cli::{Cli, Command};

pub fn dispatch(cli: &Cli) -> Result<i32> {
    let config = crate::config::load(cli.config.as_deref())?;
    match &cli.command {
        Command::Parse { file, language } => parse::run(file, *language, &config),
        Command::Extract {
            file,
            language,
            policy,
            profile,
            stats,
        } => {
            let policy = parse_policy(policy)?;
            let profile = parse_profile(profile)?;
            extract::run(file, *language, &policy, profile, *stats, &config)
        }
        Command::Rules { action } => rules::run(action),
        Command::Dsl { action } => dsl::run(action),
    }
}

/// Parses `--policy`: `comprehensive`, a language tag, `focus:<area>`, or `framework:<tag>`.
pub fn parse_policy(raw: &str) -> Result<SelectionPolicy> {
    if raw.eq_ignore_ascii_case("comprehensive") {
        return Ok(SelectionPolicy::Comprehensive);
    }
    if let Some(area) = raw.strip_prefix("focus:") {
        return Ok(SelectionPolicy::Focused(parse_focus_area(area)?));
    }
    if let Some(tag) = raw.strip_prefix("framework:") {
        return Ok(SelectionPolicy::FrameworkSpecific(parse_framework_tag(tag)?));
    }
    if let Ok(language) = raw.parse::<Language>() {
        return Ok(SelectionPolicy::LanguageSpecific(language));
    }
    bail!("unrecognized rule selection policy: {raw}")
}

fn parse_focus_area(raw: &str) -> Result<FocusArea> {
    Ok(match raw.to_ascii_lowercase().as_str() {
        "performance" => FocusArea::Performance,
        "architecture" => FocusArea::Architecture,
        "patterns" => FocusArea::Patterns,
        "concurrency" => FocusArea::Concurrency,
        other => bail!("unknown focus area: {other}"),
    })
}

fn parse_framework_tag(raw: &str) -> Result<FrameworkTag> {
    Ok(match raw.to_ascii_lowercase().as_str() {
        "react" => FrameworkTag::React,
        "django" => FrameworkTag::Django,
        "spring_boot" | "spring-boot" | "springboot" => FrameworkTag::SpringBoot,
        "express" => FrameworkTag::Express,
        other => bail!("unknown framework tag: {other}"),
    })
}

fn parse_profile(raw: &str) -> Result<ValidatorProfile> {
    Ok(match raw.to_ascii_lowercase().as_str() {
        "production" => ValidatorProfile::Production,
        "test-development" | "test_development" => ValidatorProfile::TestDevelopment,
        other => bail!("unknown validator profile: {other}"),
    })
}
