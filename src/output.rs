//! Text and JSON output for the headless commands.
//!
//! Pure functions: (model, OutputFormat) → String. No I/O.

use serde::Serialize;

use crate::catalog::{Catalog, Entry};
use crate::error::Result;
use crate::screen::{Arrangement, ScreenModel};
use crate::types::OutputFormat;

/// Format a rendered screen.
pub fn format_screen(model: &ScreenModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(screen_human(model)),
        OutputFormat::Json => to_json(model),
    }
}

/// Format the catalog with indices.
pub fn format_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(catalog
            .entries()
            .map(|Entry { index, title }| format!("{:>2}  {}\n", index, title))
            .collect()),
        OutputFormat::Json => to_json(&catalog.entries().collect::<Vec<_>>()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn screen_human(model: &ScreenModel) -> String {
    let mut out = String::new();

    let back = if model.back { "← " } else { "" };
    out.push_str(&format!("=== {}{} === ({})\n", back, model.title, model.route));

    for section in &model.sections {
        out.push('\n');
        if let Some(heading) = section.heading {
            out.push_str(&format!("{}\n", heading));
        }
        match section.arrangement {
            Arrangement::Vertical | Arrangement::Horizontal => {
                for item in &section.items {
                    out.push_str(&format!("  {}  → {}\n", item.label, item.target));
                }
            }
            Arrangement::Grid { columns } => {
                let width = section.items.iter().map(|i| i.label.len()).max().unwrap_or(0);
                for row in section.items.chunks(columns.max(1)) {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|item| format!("{:<width$}", item.label, width = width))
                        .collect();
                    out.push_str(&format!("  {}\n", cells.join("  |  ").trim_end()));
                }
            }
        }
    }

    if !model.lines.is_empty() {
        out.push('\n');
        for line in &model.lines {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
