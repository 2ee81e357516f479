use unicode_width::UnicodeWidthStr;

use super::{fact_rows, pad_start, wrap};
use crate::report::Report;

const MIN_LABEL_WIDTH: usize = 18;
const MAX_LABEL_WIDTH: usize = 40;

/// Plain-text block: a dashed rule, the date, right-aligned fact rows, the
/// toolchain banner, and one row per package.
pub fn render(report: &Report) -> String {
    let width = report.text_width.max(1);
    let label_width = label_width(report);

    let mut text = format!("\n{}\n", "-".repeat(width));

    // Date with a hanging indent when it has to wrap.
    let date = report.generated_at.format("%a %b %d %H:%M:%S %Y").to_string();
    let prefix = "  Date: ";
    for (i, chunk) in wrap(&date, width.saturating_sub(prefix.len()))
        .into_iter()
        .enumerate()
    {
        if i == 0 {
            text.push_str(prefix);
        } else {
            text.push_str(&" ".repeat(prefix.len()));
        }
        text.push_str(&chunk);
        text.push('\n');
    }
    text.push('\n');

    for (label, value) in fact_rows(report) {
        text.push_str(&pad_start(&label, label_width));
        text.push_str(" : ");
        text.push_str(&value);
        text.push('\n');
    }

    if let Some(runtime) = &report.runtime {
        text.push('\n');
        for chunk in wrap(&format!("Rust {runtime}"), width.saturating_sub(4)) {
            text.push_str("  ");
            text.push_str(&chunk);
            text.push('\n');
        }
    }

    if !report.packages.is_empty() {
        text.push('\n');
        for entry in &report.packages {
            text.push_str(&pad_start(&entry.name, label_width));
            text.push_str(" : ");
            text.push_str(entry.version.as_str());
            text.push('\n');
        }
    }

    text.push_str(&"-".repeat(width));
    text
}

fn label_width(report: &Report) -> usize {
    report
        .packages
        .iter()
        .map(|entry| entry.name.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH)
}
