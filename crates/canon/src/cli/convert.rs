//! Convert command handler.

use super::OutputFormat;
use canon_convert::{ConversionSummary, Converter};
use canon_core::CanonPaths;
use std::io::Write;

/// Handles the convert command.
///
/// A conversion failure is returned as an error; files written before the
/// failure are left in place.
#[tracing::instrument(skip_all, fields(root = %paths.root().display()))]
pub fn handle_convert_command(
    paths: &CanonPaths,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let summary = Converter::new(paths.clone()).run_all()?;

    match format {
        OutputFormat::Human => output_human(&summary, out)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
    }
    Ok(true)
}

fn output_human(summary: &ConversionSummary, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Converting YAML to Markdown Structure")?;
    writeln!(out)?;

    let counts = [
        ("characters", summary.characters),
        ("locations", summary.locations),
        ("themes", summary.themes),
        ("timeline events", summary.timeline),
        ("scenes", summary.scenes),
    ];
    for (label, count) in counts {
        writeln!(out, "  Converted {} {}", count, label)?;
    }
    for index in &summary.indexes {
        writeln!(out, "  Created {}", index.display())?;
    }

    writeln!(out)?;
    writeln!(out, "SUCCESS: Conversion completed!")
}
