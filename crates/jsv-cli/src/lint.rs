//! # Lint Subcommand
//!
//! Reports malformed keyword values in a schema file without validating
//! any document.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use jsv_schema::schema_issues;

use crate::load_document;

/// Arguments for the `jsv lint` subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Schema file to check.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,
}

/// Execute the lint subcommand, printing to stdout.
///
/// Returns exit code: 0 when the schema is clean, 1 when issues were found.
pub fn run_lint(args: &LintArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    run_lint_to(args, &mut stdout.lock())
}

/// Execute the lint subcommand, printing to `out`.
pub fn run_lint_to(args: &LintArgs, out: &mut impl Write) -> Result<u8> {
    let schema = load_document(&args.schema)?.into_parts().0;
    let issues = schema_issues(&schema);

    if issues.is_empty() {
        writeln!(out, "OK: {}", args.schema.display())?;
        return Ok(0);
    }
    writeln!(
        out,
        "FAIL: {} ({} issue(s))",
        args.schema.display(),
        issues.len()
    )?;
    write!(out, "{issues}")?;
    writeln!(out)?;
    Ok(1)
}
