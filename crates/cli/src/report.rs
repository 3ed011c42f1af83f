//! Pack report rendering.

use std::io::{self, Write};

use packplanner_core::{Pack, PackLimits, PackingSummary, SortOrder};
use serde::Serialize;

/// Formats a float for display.
///
/// With `precision` the value is rounded to that many decimals, otherwise the
/// shortest representation that round-trips is used. Trailing zeros after the
/// decimal point, and a dangling point, are dropped.
pub fn format_float(value: f64, precision: Option<usize>) -> String {
    let formatted = match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{}", value),
    };

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Writes the text report for one batch of packs.
///
/// ```text
/// Pack Number: 1
/// 1001,6200,30,9.653
/// Pack Length: 6200, Pack Weight: 289.59
///
/// ```
pub fn write_text<W: Write>(out: &mut W, packs: &[Pack]) -> io::Result<()> {
    for pack in packs {
        writeln!(out, "Pack Number: {}", pack.id)?;
        for item in &pack.distinct_items {
            writeln!(
                out,
                "{},{},{},{}",
                item.id,
                item.length,
                item.quantity,
                format_float(item.weight, None)
            )?;
        }
        writeln!(
            out,
            "Pack Length: {}, Pack Weight: {}",
            pack.max_length,
            format_float(pack.total_weight, Some(2))
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Renders the text report into a string.
pub fn render_text(packs: &[Pack]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_text(&mut buf, packs);
    String::from_utf8_lossy(&buf).into_owned()
}

/// JSON document for one packed batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport<'a> {
    /// Header line of the batch in the input.
    pub line: usize,
    pub sort_order: SortOrder,
    pub limits: PackLimits,
    pub packs: &'a [Pack],
    pub summary: PackingSummary,
}

/// Writes a batch report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &BatchReport<'_>) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
