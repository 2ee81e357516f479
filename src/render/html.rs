use std::fmt::Write;

use super::fact_rows;
use crate::report::Report;

const BORDER: &str = "border: 2px solid #fff;'";

/// Single HTML table: the date as a bold full-width row, fact cells, the
/// toolchain banner as a shaded full-width row, then name/version cell pairs
/// laid out `ncol` pairs per row with empty cells filling the last row.
pub fn render(report: &Report) -> String {
    let ncol = report.ncol.max(1);
    let mut html = String::from("<table style='border: 3px solid #ddd;'>\n");

    let date = report.generated_at.format("%a %b %d %H:%M:%S %Y").to_string();
    colspan(&mut html, &date, ncol, 0);

    html.push_str("  <tr>\n");
    let mut i = 0;
    for (label, value) in fact_rows(report) {
        cols(&mut html, &value, &label, ncol, &mut i);
    }
    html.push_str("  </tr>\n");

    if let Some(runtime) = &report.runtime {
        colspan(&mut html, &format!("Rust {runtime}"), ncol, 1);
    }

    html.push_str("  <tr>\n");
    let mut i = 0;
    for entry in &report.packages {
        cols(&mut html, entry.version.as_str(), &entry.name, ncol, &mut i);
    }
    while i % ncol != 0 {
        let _ = writeln!(html, "    <td style= {BORDER}></td>");
        let _ = writeln!(html, "    <td style= {BORDER}></td>");
        i += 1;
    }
    html.push_str("  </tr>\n");

    html.push_str("</table>");
    html
}

/// One row spanning the whole table.
fn colspan(html: &mut String, text: &str, ncol: usize, nrow: usize) {
    html.push_str("  <tr>\n");
    html.push_str("     <td style='text-align: center; ");
    if nrow == 0 {
        html.push_str("font-weight: bold; font-size: 1.2em; ");
    } else if nrow % 2 == 0 {
        html.push_str("background-color: #ddd;");
    }
    html.push_str(BORDER);
    let _ = writeln!(html, " colspan='{}'>{text}</td>", 2 * ncol);
    html.push_str("  </tr>\n");
}

/// One name/version pair as two cells, wrapping to a new row every `ncol`
/// pairs.
fn cols(html: &mut String, value: &str, name: &str, ncol: usize, i: &mut usize) {
    if *i > 0 && *i % ncol == 0 {
        html.push_str("  </tr>\n");
        html.push_str("  <tr>\n");
    }
    html.push_str("    <td style='text-align: right; background-color: #ccc; ");
    html.push_str(BORDER);
    let _ = writeln!(html, ">{name}</td>");
    html.push_str("    <td style='text-align: left; ");
    html.push_str(BORDER);
    let _ = writeln!(html, ">{value}</td>");
    *i += 1;
}
