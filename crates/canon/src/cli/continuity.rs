//! Continuity command handler.

use super::OutputFormat;
use canon_check::{ContinuityReport, run_continuity};
use canon_core::CanonPaths;
use std::io::Write;

/// Handles the continuity command.
///
/// Returns whether the repository passed, that is whether no load or check
/// issue was found.
#[tracing::instrument(skip_all, fields(root = %paths.root().display()))]
pub fn handle_continuity_command(
    paths: &CanonPaths,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    tracing::info!("Starting continuity check");
    let report = run_continuity(paths);

    match format {
        OutputFormat::Human => output_human(&report, out)?,
        OutputFormat::Json => output_json(&report, out)?,
    }

    Ok(report.passed())
}

/// Outputs the report in human-readable format.
fn output_human(report: &ContinuityReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Continuity Check Results")?;
    writeln!(out)?;

    if report.passed() {
        writeln!(out, "SUCCESS: No continuity issues found!")?;
        return Ok(());
    }

    if !report.load_issues.is_empty() {
        writeln!(out, "Load Errors:")?;
        for issue in &report.load_issues {
            writeln!(out, "  ERROR: {}", issue)?;
        }
        writeln!(out)?;
    }

    for (check, issues) in &report.results {
        if issues.is_empty() {
            continue;
        }
        writeln!(out, "{}:", check.title())?;
        for issue in issues {
            writeln!(out, "  ERROR: {}", issue)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Total issues found: {}", report.total_issues())
}

/// Outputs the report in JSON format.
fn output_json(report: &ContinuityReport, out: &mut impl Write) -> anyhow::Result<()> {
    use serde_json::json;

    let output = json!({
        "passed": report.passed(),
        "total_issues": report.total_issues(),
        "load_issues": report.load_issues,
        "results": report.results,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
