//! Validation command handlers.

use super::OutputFormat;
use canon_check::ValidationResult;
use canon_check::markdown::MarkdownValidator;
use canon_check::schema::SchemaValidator;
use canon_core::CanonPaths;
use std::io::Write;

/// Handles the validate command for the YAML canon.
///
/// # Arguments
///
/// * `paths` - Resolved repository layout
/// * `format` - Output format (human or json)
/// * `strict` - Treat warnings as errors
/// * `out` - Report destination
#[tracing::instrument(skip_all, fields(root = %paths.root().display(), strict = strict))]
pub fn handle_validate_command(
    paths: &CanonPaths,
    format: OutputFormat,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    tracing::info!("Starting schema validation");
    let result = SchemaValidator::new(paths.clone()).run_all();
    output_result("Story Validation", &result, format, strict, out)
}

/// Handles the validate-markdown command.
#[tracing::instrument(skip_all, fields(root = %paths.root().display(), strict = strict))]
pub fn handle_validate_markdown_command(
    paths: &CanonPaths,
    format: OutputFormat,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    tracing::info!("Starting markdown validation");
    let result = MarkdownValidator::new(paths.clone()).run_all();
    output_result("Markdown Validation", &result, format, strict, out)
}

fn output_result(
    title: &str,
    result: &ValidationResult,
    format: OutputFormat,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let passed = result.passes(strict);
    tracing::info!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        passed,
        "Validation finished"
    );

    match format {
        OutputFormat::Human => output_human(title, result, passed, out)?,
        OutputFormat::Json => output_json(result, passed, strict, out)?,
    }
    Ok(passed)
}

/// Outputs validation result in human-readable format.
fn output_human(
    title: &str,
    result: &ValidationResult,
    passed: bool,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "Running {}", title)?;

    if !result.errors.is_empty() {
        writeln!(out, "\nERRORS:")?;
        writeln!(out, "{}", result.format_errors())?;
    }

    if !result.warnings.is_empty() {
        writeln!(out, "\nWARNINGS:")?;
        writeln!(out, "{}", result.format_warnings())?;
    }

    if passed {
        writeln!(out, "\nSUCCESS: All checks passed!")
    } else {
        writeln!(out, "\nERROR: Validation failed")
    }
}

/// Outputs validation result in JSON format.
fn output_json(
    result: &ValidationResult,
    passed: bool,
    strict: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    use serde_json::json;

    let output = json!({
        "valid": result.is_valid(),
        "passed": passed,
        "strict": strict,
        "errors": result.errors,
        "warnings": result.warnings,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
