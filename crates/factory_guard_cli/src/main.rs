//! Command-line harness for the employee factories.
//!
//! # Responsibility
//! - Run canned fixtures or ad-hoc JSON through one selected factory.
//! - Print each outcome; all validation lives in `factory_guard_core`.
//!
//! # Invariants
//! - A factory rejecting its input is a reported outcome, not a CLI failure.
//! - The exit code is non-zero only for harness errors (flags, JSON, logging).

use anyhow::{bail, Context, Result};
use clap::Parser;
use factory_guard_core::{
    core_version, default_log_level, fixture, fixtures, init_logging, Construction,
    FactoryService, FactoryVersion, Fixture, LoggingConfig,
};
use log::debug;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "factory_guard",
    version,
    about = "Compare employee factories on untrusted input"
)]
struct Cli {
    /// Factory to run: v1, v2, v3 or raw.
    #[arg(long, short, default_value_t = FactoryVersion::V3)]
    factory: FactoryVersion,

    /// Run one named fixture.
    #[arg(long, conflicts_with_all = ["all", "input", "list"])]
    case: Option<String>,

    /// Run every fixture.
    #[arg(long, conflicts_with_all = ["input", "list"])]
    all: bool,

    /// Run an ad-hoc JSON value.
    #[arg(long, conflicts_with = "list")]
    input: Option<String>,

    /// List fixtures and factories, then exit.
    #[arg(long)]
    list: bool,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr otherwise.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let logging = LoggingConfig::new(&level, cli.log_dir.as_deref())
        .context("invalid logging configuration")?;
    init_logging(&logging).context("failed to initialize logging")?;
    debug!(
        "event=cli_start module=cli version={} factory={}",
        core_version(),
        cli.factory
    );

    if cli.list {
        print_listing();
        return Ok(());
    }

    let service = FactoryService::new(cli.factory);
    let cases = select_cases(&cli)?;
    for case in &cases {
        report(&service, case)?;
    }
    Ok(())
}

fn select_cases(cli: &Cli) -> Result<Vec<Fixture>> {
    if let Some(raw) = &cli.input {
        let input: Value = serde_json::from_str(raw).context("--input is not valid JSON")?;
        return Ok(vec![Fixture {
            name: "input",
            description: "Ad-hoc JSON from --input",
            input,
        }]);
    }
    if cli.all {
        return Ok(fixtures());
    }

    let name = cli.case.as_deref().unwrap_or("valid");
    match fixture(name) {
        Some(case) => Ok(vec![case]),
        None => {
            let known: Vec<&str> = fixtures().iter().map(|case| case.name).collect();
            bail!("unknown case `{name}`; expected one of {}", known.join("|"))
        }
    }
}

fn report(service: &FactoryService, case: &Fixture) -> Result<()> {
    let version = service.version();
    let result = service.run(&case.input);
    let status = if result.is_ok() { "ok" } else { "error" };
    println!("{}", status_line(case.name, version, status));
    println!("  {}", case.description);
    println!("  input: {}", case.input);

    match result {
        Ok(construction) => {
            if !version.validates() {
                println!("  note: {}", version.description());
            }
            if let Construction::Unchecked(unchecked) = &construction {
                let missing = unchecked.missing_fields();
                if !missing.is_empty() {
                    println!("  missing: {}", missing.join(","));
                }
            }
            let rendered = serde_json::to_string_pretty(&construction)
                .context("failed to render construction")?;
            for line in rendered.lines() {
                println!("  {line}");
            }
        }
        Err(err) => println!("  {err}"),
    }
    println!();
    Ok(())
}

fn status_line(case: &str, version: FactoryVersion, status: &str) -> String {
    format!("case={case} factory={version} status={status}")
}

fn print_listing() {
    println!("factories:");
    for version in FactoryVersion::ALL {
        println!("  {:<4} {}", version.as_str(), version.description());
    }
    println!("cases:");
    for case in fixtures() {
        println!("  {:<24} {}", case.name, case.description);
    }
}

#[cfg(test)]
mod tests {
    use super::{select_cases, status_line, Cli};
    use clap::{CommandFactory, Parser};
    use factory_guard_core::FactoryVersion;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_strict_factory_and_valid_case() {
        let cli = Cli::try_parse_from(["factory_guard"]).expect("no args parse");
        assert_eq!(cli.factory, FactoryVersion::V3);
        let cases = select_cases(&cli).expect("default case");
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].name, "valid");
    }

    #[test]
    fn parses_factory_and_all_flag() {
        let cli = Cli::try_parse_from(["factory_guard", "--factory", "RAW", "--all"])
            .expect("valid args");
        assert_eq!(cli.factory, FactoryVersion::Raw);
        assert_eq!(select_cases(&cli).expect("all cases").len(), 7);
    }

    #[test]
    fn rejects_unknown_factory_and_case() {
        assert!(Cli::try_parse_from(["factory_guard", "--factory", "v9"]).is_err());

        let cli = Cli::try_parse_from(["factory_guard", "--case", "nope"]).expect("parses");
        assert!(select_cases(&cli).is_err());
    }

    #[test]
    fn status_line_carries_case_factory_and_status() {
        assert_eq!(
            status_line("string_id", FactoryVersion::V1, "error"),
            "case=string_id factory=v1 status=error"
        );
        assert_eq!(
            status_line("valid", FactoryVersion::Raw, "ok"),
            "case=valid factory=raw status=ok"
        );
    }

    #[test]
    fn ad_hoc_input_must_be_json() {
        let cli = Cli::try_parse_from(["factory_guard", "--input", "{not json"]).expect("parses");
        assert!(select_cases(&cli).is_err());

        let cli = Cli::try_parse_from(["factory_guard", "--input", r#"{"id":1}"#])
            .expect("parses");
        assert_eq!(select_cases(&cli).expect("json input")[0].input["id"], 1);
    }
}
