use crate::border::Border;
use crate::error::{Result, TableError};
use crate::header::{Header, parse_headers_with};
use crate::options::{MissingCells, RenderOptions};
use crate::row::{Row, parse_rows};
use crate::text::center;

/// Headers paired with the data rows rendered under them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    headers: Vec<Header>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<Header>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Parse a header specification line followed by data lines
    pub fn parse<I, S>(header_line: &str, lines: I, options: &RenderOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers = parse_headers_with(header_line, options.min_width)?;
        Ok(Self::new(headers, parse_rows(lines)))
    }

    /// Parse text whose first line is the header specification
    pub fn parse_text(input: &str, options: &RenderOptions) -> Result<Self> {
        let mut lines = input.lines();
        let header_line = lines.next().ok_or(TableError::InvalidHeaderSpec)?;
        Self::parse(header_line, lines, options)
    }

    /// Build a table from a grid of entered values: row 0 holds the headers.
    ///
    /// Header cells are cleaned the same way as bracketed tokens. Data cells
    /// are taken verbatim and trailing rows with no content are dropped.
    pub fn from_grid<R, S>(grid: &[R], options: &RenderOptions) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let (header_cells, data) = grid.split_first().ok_or(TableError::InvalidHeaderSpec)?;
        let header_cells = header_cells.as_ref();
        if header_cells.iter().all(|cell| cell.as_ref().trim().is_empty()) {
            return Err(TableError::InvalidHeaderSpec);
        }

        let headers = header_cells
            .iter()
            .map(|cell| Header::new(cell.as_ref(), options.min_width))
            .collect();

        let used = data
            .iter()
            .rposition(|row| row.as_ref().iter().any(|cell| !cell.as_ref().trim().is_empty()))
            .map_or(0, |last| last + 1);
        let rows = data[..used]
            .iter()
            .map(|row| Row::new(row.as_ref().iter().map(|cell| cell.as_ref().trim())))
            .collect();

        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Per-column widths, taken from the headers only
    pub fn widths(&self) -> Vec<usize> {
        self.headers.iter().map(Header::width).collect()
    }

    /// Render with the default options
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    /// Render the bordered table. No newline follows the bottom border.
    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let widths = self.widths();
        let middle = Border::Middle.draw(&widths);

        let mut lines = Vec::with_capacity(3 + self.rows.len() * 2);
        lines.push(Border::Top.draw(&widths));
        lines.push(self.header_line());
        lines.push(middle.clone());

        for (index, row) in self.rows.iter().enumerate() {
            lines.push(self.row_line(index, row, &widths, options.missing_cells)?);
            lines.push(middle.clone());
        }

        // the last delimiter closes the table
        if let Some(last) = lines.last_mut() {
            *last = Border::Bottom.draw(&widths);
        }

        Ok(lines.join("\n"))
    }

    /// `|` before every label, then the last character is replaced by `" |"`.
    ///
    /// A padded last label loses a space; a full-width one loses its final letter.
    fn header_line(&self) -> String {
        let labels: Vec<String> = self.headers.iter().map(Header::label).collect();
        let mut line = format!("|{}", labels.join("|"));
        line.pop();
        line.push_str(" |");
        line
    }

    fn row_line(
        &self,
        index: usize,
        row: &Row,
        widths: &[usize],
        missing_cells: MissingCells,
    ) -> Result<String> {
        let mut line = String::from("|");
        for (column, &width) in widths.iter().enumerate() {
            let cell = match (row.cell(column), missing_cells) {
                (Some(cell), _) => cell,
                (None, MissingCells::Blank) => "",
                (None, MissingCells::Error) => {
                    return Err(TableError::RowCellIndexOutOfRange {
                        row: index,
                        column,
                        cells: row.len(),
                    });
                }
            };
            line.push_str(&center(cell, width));
            line.push('|');
        }
        Ok(line)
    }
}
