// brandguard/src/ui/summary.rs
//! Tabular summary of the rewrites each sanitizer pass made.

use brandguard_core::RepairSummaryItem;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, Write};

/// Distinct values of a list, in first-seen order.
fn distinct(values: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for v in values {
        if !seen.contains(&v.as_str()) {
            seen.push(v.as_str());
        }
    }
    seen
}

pub fn print_summary<W: Write>(summary: &[RepairSummaryItem], writer: &mut W, supports_color: bool) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(writer, "No repairs were needed.");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Pass", "Occurrences", "Original", "Replacement"]);
    if !supports_color {
        table.force_no_tty();
    }

    for item in summary {
        let pass = if supports_color {
            Cell::new(item.pass.to_string()).fg(Color::Cyan)
        } else {
            Cell::new(item.pass.to_string())
        };
        table.add_row(vec![
            pass,
            Cell::new(item.occurrences),
            Cell::new(distinct(&item.original_texts).join("\n")),
            Cell::new(distinct(&item.replacement_texts).join("\n")),
        ]);
    }

    writeln!(writer, "Repair Summary:")?;
    writeln!(writer, "{}", table)
}
