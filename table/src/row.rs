/// One line of data split into cells
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw line on runs of spaces. Tabs inside the line stay part of
    /// a cell; trailing whitespace of any kind is dropped first.
    pub fn parse(line: &str) -> Self {
        Self::new(line.trim_end().split(' ').filter(|cell| !cell.is_empty()))
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse every data line into a row, keeping input order
pub fn parse_rows<I, S>(lines: I) -> Vec<Row>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|line| Row::parse(line.as_ref())).collect()
}
