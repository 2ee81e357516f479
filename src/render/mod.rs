pub mod html;
pub mod text;

use unicode_width::UnicodeWidthStr;

use crate::report::Report;

/// Labelled fact rows shared by both renderers, in display order.
pub(crate) fn fact_rows(report: &Report) -> Vec<(String, String)> {
    let host = &report.host;
    let mut rows = vec![("OS".to_string(), host.os.clone())];
    if let Some(count) = host.cpu_count {
        rows.push(("CPU(s)".to_string(), count.to_string()));
    }
    rows.push(("Machine".to_string(), host.machine.clone()));
    rows.push(("Architecture".to_string(), host.architecture.clone()));
    if let Some(ram) = &host.total_ram {
        rows.push(("RAM".to_string(), ram.clone()));
    }
    if let Some(kernel) = &host.kernel {
        rows.push(("Kernel".to_string(), kernel.clone()));
    }
    if let Some(fs) = &host.filesystem {
        rows.push(("File system".to_string(), fs.clone()));
    }
    for (key, value) in &report.extra_meta {
        rows.push((key.clone(), value.clone()));
    }
    rows
}

/// Greedy word-wrap on display width. A word wider than the limit gets its
/// own line rather than being split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub(crate) fn pad_start(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    format!("{}{s}", " ".repeat(width - w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_display_width() {
        assert_eq!(wrap("a bb ccc dddd", 6), ["a bb", "ccc", "dddd"]);
    }

    #[test]
    fn wrap_keeps_oversized_words_whole() {
        assert_eq!(wrap("short incomprehensibilities", 10), [
            "short",
            "incomprehensibilities"
        ]);
    }

    #[test]
    fn pad_start_right_aligns() {
        assert_eq!(pad_start("OS", 5), "   OS");
        assert_eq!(pad_start("too wide already", 5), "too wide already");
    }
}
