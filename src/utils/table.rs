//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Effective column widths: declared width or the widest cell,
    /// measured in display columns (subjects may be CJK).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.width.max(UnicodeWidthStr::width(c.header.as_str())))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let used = UnicodeWidthStr::width(cell);
        let mut out = cell.to_string();
        for _ in used..width {
            out.push(' ');
        }
        out
    }

    pub fn render(&self) -> String {
        self.render_with_separator(None)
    }

    /// Render the table; with `separator` set, a ruler line of that char is
    /// drawn between the header and the body.
    pub fn render_with_separator(&self, separator: Option<&str>) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&Self::pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        if let Some(sep) = separator {
            let total: usize = widths.iter().sum::<usize>() + widths.len();
            out.push_str(&sep.repeat(total.max(1)));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&Self::pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
