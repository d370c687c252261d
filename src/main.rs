//! py2rs command line
//!
//! ```text
//! py2rs script.py                 # Rust to stdout
//! py2rs script.py -o script.rs    # Rust to file
//! cat script.py | py2rs --json    # {"rust_code": ..., "success": ..., "error": ...}
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use py2rs::config::MAX_INDENT_WIDTH;
use py2rs::rust_sanity::check_balanced_delimiters;
use py2rs::{TranspileConfig, Transpiler};

#[derive(Parser, Debug)]
#[command(name = "py2rs", version, about = "Rule-based Python to Rust source rewriter")]
struct Cli {
    /// Python source file (stdin when omitted)
    input: Option<PathBuf>,

    /// Write Rust output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Spaces per nesting level (0-16)
    #[arg(long, value_parser = parse_indent)]
    indent: Option<usize>,

    /// Name of the synthetic entry point
    #[arg(long)]
    entry_point: Option<String>,

    /// Do not wrap output in an entry point
    #[arg(long)]
    no_wrap: bool,

    /// Print a JSON response instead of plain Rust
    #[arg(long)]
    json: bool,

    /// Report unbalanced delimiters in the output
    #[arg(long)]
    check: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct ConversionResponse {
    rust_code: String,
    success: bool,
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else warn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "py2rs=debug" } else { "py2rs=warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    // Stage panics are caught and rendered as `//` diagnostics
    std::panic::set_hook(Box::new(|info| debug!(%info, "caught panic")));

    let config = load_config(&cli)?;
    let source = read_source(cli.input.as_ref())?;
    if source.trim().is_empty() {
        bail!("no Python code provided");
    }

    let transpiler = Transpiler::with_config(config);
    let conversion = transpiler.convert(&source);
    info!(bytes = conversion.rust_code.len(), success = conversion.is_success(), "transpiled");

    if cli.check {
        let report = check_balanced_delimiters(&conversion.rust_code);
        for issue in &report.issues {
            warn!("{}", issue);
        }
    }

    let rendered = if cli.json {
        let response = ConversionResponse {
            success: conversion.is_success(),
            error: conversion.error.map(|e| e.to_string()),
            rust_code: conversion.rust_code,
        };
        serde_json::to_string_pretty(&response).context("failed to encode response")?
    } else {
        conversion.rust_code
    };

    write_output(cli.output.as_ref(), &rendered)
}

fn load_config(cli: &Cli) -> Result<TranspileConfig> {
    let mut config = match &cli.config {
        Some(path) => TranspileConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TranspileConfig::default(),
    };
    if let Some(width) = cli.indent {
        config.indent_width = width;
    }
    if let Some(name) = &cli.entry_point {
        config.entry_point = name.clone();
    }
    if cli.no_wrap {
        config.wrap_entry_point = false;
    }
    config.validate()?;
    Ok(config)
}

fn parse_indent(value: &str) -> Result<usize, String> {
    let width: usize = value.parse().map_err(|e| format!("{}", e))?;
    if width > MAX_INDENT_WIDTH {
        return Err(format!("must be at most {}", MAX_INDENT_WIDTH));
    }
    Ok(width)
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{}\n", text))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text).context("failed to write stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indent_bounds() {
        assert_eq!(parse_indent("2"), Ok(2));
        assert_eq!(parse_indent("16"), Ok(16));
        assert!(parse_indent("17").is_err());
        assert!(parse_indent("-1").is_err());
    }

    #[test]
    fn test_cli_rejects_wide_indent() {
        assert!(Cli::try_parse_from(["py2rs", "--indent", "4096"]).is_err());
        let cli = Cli::try_parse_from(["py2rs", "--indent", "8"]).unwrap();
        assert_eq!(load_config(&cli).unwrap().indent_width, 8);
    }
}
