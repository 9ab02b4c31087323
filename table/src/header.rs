use crate::error::{Result, TableError};
use crate::options::DEFAULT_MIN_WIDTH;
use crate::text::{center, char_len};

/// Separator between bracketed tokens in a header specification line
pub const HEADER_DELIMITER: &str = "] ";

/// A named column. The label is the name centered in the column width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    name: String,
    width: usize,
}

impl Header {
    /// Build a header from a raw token, removing whitespace and brackets
    pub fn new(token: &str, min_width: usize) -> Self {
        let name = clean_token(token);
        let width = char_len(&name).max(min_width);
        Self { name, width }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column width, fixed by the header alone
    pub fn width(&self) -> usize {
        self.width
    }

    /// The padded label as it appears in the header row
    pub fn label(&self) -> String {
        center(&self.name, self.width)
    }
}

fn clean_token(token: &str) -> String {
    token.trim().replace(['[', ']'], "")
}

/// Parse a `[Name1] [Name2] ...` line using the default minimum width
pub fn parse_headers(line: &str) -> Result<Vec<Header>> {
    parse_headers_with(line, DEFAULT_MIN_WIDTH)
}

/// Parse a header specification line, padding each label to `min_width`
pub fn parse_headers_with(line: &str, min_width: usize) -> Result<Vec<Header>> {
    if line.trim().is_empty() {
        return Err(TableError::InvalidHeaderSpec);
    }

    Ok(line
        .split(HEADER_DELIMITER)
        .map(|token| Header::new(token, min_width))
        .collect())
}
