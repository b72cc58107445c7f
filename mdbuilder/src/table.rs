//! Pipe table formatting

use crate::error::MarkdownError;
use crate::line_feed::LineFeed;

/// Table column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlignment {
    /// No explicit alignment (renders left aligned)
    #[default]
    Default,
    /// `:--------`
    Left,
    /// `:-------:`
    Center,
    /// `--------:`
    Right,
}

impl TableAlignment {
    /// Separator cell for this alignment, including the closing pipe
    fn separator(self) -> &'static str {
        match self {
            TableAlignment::Left => ":--------|",
            TableAlignment::Center => ":-------:|",
            TableAlignment::Right => "--------:|",
            TableAlignment::Default => "---------|",
        }
    }
}

/// Header, rows and per-column alignment of a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet {
    /// Header cells
    pub header: Vec<String>,
    /// Data rows; each must have as many cells as the header
    pub rows: Vec<Vec<String>>,
    /// Alignment per column; missing entries use `TableAlignment::Default`
    pub alignment: Vec<TableAlignment>,
}

impl TableSet {
    /// Create a table from a header and rows
    pub fn new<H, R, S>(header: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            alignment: Vec::new(),
        }
    }

    /// Set the column alignments
    pub fn with_alignment(mut self, alignment: impl IntoIterator<Item = TableAlignment>) -> Self {
        self.alignment = alignment.into_iter().collect();
        self
    }

    /// Check that every row has as many cells as the header
    ///
    /// # Returns
    /// * `Ok(())` - All rows match the header
    /// * `Err(MarkdownError::ColumnMismatch)` - The first row that does not
    pub fn validate_columns(&self) -> Result<(), MarkdownError> {
        let expected = self.header.len();
        match self.rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(MarkdownError::ColumnMismatch {
                expected,
                found: self.rows[row].len(),
                row,
            }),
            None => Ok(()),
        }
    }

    /// Render as a pipe table; every row, the last included, ends with a line feed
    ///
    /// Returns `None` for a table without header cells.
    pub(crate) fn render(&self, line_feed: LineFeed) -> Option<String> {
        if self.header.is_empty() {
            return None;
        }

        let lf = line_feed.as_str();
        let mut output = String::new();

        // Write header row
        write_row(&mut output, &self.header, lf);

        // Write separator row with alignment
        output.push('|');
        for i in 0..self.header.len() {
            let align = self.alignment.get(i).copied().unwrap_or_default();
            output.push_str(align.separator());
        }
        output.push_str(lf);

        // Write data rows
        for row in &self.rows {
            write_row(&mut output, row, lf);
        }

        Some(output)
    }
}

fn write_row(output: &mut String, cells: &[String], lf: &str) {
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(cell);
        output.push_str(" |");
    }
    output.push_str(lf);
}
