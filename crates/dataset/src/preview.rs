//! Plain-text previews of a dataset's leading rows.
//!
//! The layout mirrors a pandas `DataFrame.head().to_string()`: an unnamed,
//! left-aligned index column followed by right-aligned data columns, one
//! space apart, with blank cells printed as `NaN`.

use crate::Dataset;

const MISSING: &str = "NaN";

impl Dataset {
    /// Render the first `rows` rows as an aligned text table.
    pub fn preview(&self, rows: usize) -> String {
        if self.columns.is_empty() || self.rows.is_empty() {
            return format!(
                "Empty DataFrame\nColumns: [{}]\nIndex: []",
                self.columns.join(", ")
            );
        }

        let shown: Vec<&Vec<String>> = self.rows.iter().take(rows).collect();

        let index_labels: Vec<String> = (0..shown.len()).map(|i| i.to_string()).collect();
        let index_width = index_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                shown
                    .iter()
                    .map(|row| display_cell(row.get(c).map(String::as_str).unwrap_or("")).chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(shown.len() + 1);

        let mut header = " ".repeat(index_width);
        for (name, width) in self.columns.iter().zip(&widths) {
            header.push(' ');
            header.push_str(&pad_left(name, *width));
        }
        lines.push(header);

        for (label, row) in index_labels.iter().zip(&shown) {
            let mut line = pad_right(label, index_width);
            for (cell, width) in row.iter().zip(&widths) {
                line.push(' ');
                line.push_str(&pad_left(display_cell(cell), *width));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

/// Context handed to an agent: the preview when a dataset is loaded.
pub fn context_snippet(dataset: Option<&Dataset>, rows: usize) -> Option<String> {
    dataset.map(|ds| ds.preview(rows))
}

fn display_cell(cell: &str) -> &str {
    if cell.is_empty() {
        MISSING
    } else {
        cell
    }
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
