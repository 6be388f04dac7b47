//! Width-aware table rendering for `ls` and `templates` output.

use unicode_width::UnicodeWidthStr;

/// Display width of a string (unicode-aware, wide chars count as 2).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to a display width, appending an ellipsis when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}

/// A two-or-more column table with widths fitted to the content.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            widths: headers.iter().map(|h| display_width(h)).collect(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.headers.len());
        for (i, cell) in cells.iter().enumerate() {
            self.widths[i] = self.widths[i].max(display_width(cell));
        }
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with two spaces between columns; trailing cells unpadded.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_line(&mut out, &self.headers);
        let underline: Vec<String> = self.widths.iter().map(|w| "-".repeat(*w)).collect();
        self.render_line(&mut out, &underline);
        for row in &self.rows {
            self.render_line(&mut out, row);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[String]) {
        let last = cells.len().saturating_sub(1);
        for (i, cell) in cells.iter().enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(cell);
                let pad = self.widths[i].saturating_sub(display_width(cell)) + 2;
                out.push_str(&" ".repeat(pad));
            }
        }
        out.push('\n');
    }
}
