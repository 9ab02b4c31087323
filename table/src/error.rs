use std::result;
use thiserror::Error;

/// Message printed by text front ends when no header line was supplied
pub const NO_INPUT_DATA: &str = "ERROR NO INPUT DATA";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Header specification is empty")]
    InvalidHeaderSpec,

    #[error("Row {row} has {cells} cells, column {column} is out of range")]
    RowCellIndexOutOfRange {
        row: usize,
        column: usize,
        cells: usize,
    },

    #[error("{0}: {1}")]
    WithContext(String, Box<TableError>),
}

impl TableError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        TableError::WithContext(context.into(), Box::new(self))
    }

    /// Strip any context layers and return the underlying error
    pub fn root(&self) -> &TableError {
        match self {
            TableError::WithContext(_, err) => err.root(),
            other => other,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            TableError::InvalidHeaderSpec => NO_INPUT_DATA.to_string(),
            TableError::RowCellIndexOutOfRange { row, column, cells } => format!(
                "Data row {} has only {} cell(s) but column {} was expected",
                row + 1,
                cells,
                column + 1
            ),
            TableError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = result::Result<T, TableError>;

/// Helper trait for adding context to results
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for result::Result<T, E>
where
    E: Into<TableError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let table_err: TableError = err.into();
            table_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_message_is_fixed_diagnostic() {
        assert_eq!(TableError::InvalidHeaderSpec.user_message(), "ERROR NO INPUT DATA");
    }

    #[test]
    fn test_out_of_range_message_is_one_based() {
        let err = TableError::RowCellIndexOutOfRange {
            row: 0,
            column: 2,
            cells: 2,
        };
        assert_eq!(
            err.user_message(),
            "Data row 1 has only 2 cell(s) but column 3 was expected"
        );
    }

    #[test]
    fn test_context_wraps_and_root_unwraps() {
        let result: Result<()> = Err(TableError::InvalidHeaderSpec);
        let err = result.with_context(|| "Reading table").unwrap_err();

        assert_eq!(err.user_message(), "Reading table: ERROR NO INPUT DATA");
        assert_eq!(err.root(), &TableError::InvalidHeaderSpec);
    }
}
