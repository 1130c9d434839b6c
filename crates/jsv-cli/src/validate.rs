//! # Validate Subcommand
//!
//! Validates one document file against one schema file and prints the
//! report, either as text (one line per error, nested details indented)
//! or as the JSON report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use jsv_schema::{lint_schema, validate, ValidationError, ValidationResult, DEFAULT_REPORT_ROOT};

use crate::load_document;

/// Report format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// The JSON report `{valid, errors}`.
    Json,
}

/// Arguments for the `jsv validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema file.
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Document file to validate.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Root token of reported schema paths.
    #[arg(long, value_name = "TOKEN", default_value = DEFAULT_REPORT_ROOT)]
    pub root: String,
}

/// Execute the validate subcommand, printing to stdout.
///
/// Returns exit code: 0 when the document is valid, 1 when it is not.
/// I/O, parse and lint failures are returned as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    run_validate_to(args, &mut stdout.lock())
}

/// Execute the validate subcommand, printing to `out`.
pub fn run_validate_to(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let schema = load_document(&args.schema)?.into_parts().0;
    lint_schema(&schema)
        .with_context(|| format!("schema {} is malformed", args.schema.display()))?;
    let document = load_document(&args.document)?;

    let result = validate(
        document.value(),
        &schema,
        &args.root,
        "",
        document.source_map(),
    );
    tracing::info!(
        document = %args.document.display(),
        valid = result.is_valid(),
        errors = result.errors().len(),
        "validated document"
    );

    match args.format {
        OutputFormat::Text => write_text(out, &args.document, &result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
        }
    }

    Ok(if result.is_valid() { 0 } else { 1 })
}

fn write_text(
    out: &mut impl Write,
    document: &std::path::Path,
    result: &ValidationResult,
) -> Result<()> {
    if result.is_valid() {
        writeln!(out, "OK: {}", document.display())?;
        return Ok(());
    }
    writeln!(
        out,
        "FAIL: {} ({} error(s))",
        document.display(),
        result.errors().len()
    )?;
    for error in result.errors() {
        write_error(out, error, 1)?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, error: &ValidationError, depth: usize) -> Result<()> {
    let indent = "  ".repeat(depth);
    writeln!(
        out,
        "{indent}line {}: {}: {}",
        error.line, error.path, error.message
    )?;
    for detail in error.details.as_deref().unwrap_or_default() {
        write_error(out, detail, depth + 1)?;
    }
    Ok(())
}
