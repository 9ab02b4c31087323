use clap::ValueEnum;
use serde::Deserialize;

/// Smallest label width a column can have
pub const DEFAULT_MIN_WIDTH: usize = 4;

/// What to do when a data row is shorter than the header row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingCells {
    /// Fail the whole render with `RowCellIndexOutOfRange`
    #[default]
    Error,
    /// Render the missing cell as blank space
    Blank,
}

/// Knobs for header padding and row strictness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub min_width: usize,
    pub missing_cells: MissingCells,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            missing_cells: MissingCells::Error,
        }
    }
}

impl RenderOptions {
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_missing_cells(mut self, missing_cells: MissingCells) -> Self {
        self.missing_cells = missing_cells;
        self
    }
}
