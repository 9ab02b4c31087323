//! Fixed-width, box-drawn ASCII tables.
//!
//! A table is described by a header specification line such as
//! `[Name] [Qty]` and space-separated data lines. Column widths come
//! from the headers alone and every cell is centered in its column:
//!
//! ```text
//! .----+----.
//! |Name|Qty |
//! |----+----|
//! |pear| 12 |
//! '----+----'
//! ```

mod border;
mod error;
mod header;
mod options;
mod row;
mod table;
mod text;

pub use border::Border;
pub use error::{NO_INPUT_DATA, Result, ResultExt, TableError};
pub use header::{HEADER_DELIMITER, Header, parse_headers, parse_headers_with};
pub use options::{DEFAULT_MIN_WIDTH, MissingCells, RenderOptions};
pub use row::{Row, parse_rows};
pub use table::Table;
pub use text::{center, char_len};

/// Render text whose first line is the header specification.
///
/// Header problems come back as they are; a row that cannot be rendered is
/// wrapped with context, so match on [`TableError::root`].
pub fn render_text(input: &str, options: &RenderOptions) -> Result<String> {
    Table::parse_text(input, options)?
        .render_with(options)
        .with_context(|| "Failed to render table")
}
