use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clipboard::Backend;
use table::MissingCells;

#[derive(Parser)]
#[command(name = "boxtab")]
#[command(
    author,
    version,
    about = "Render space-separated data as a box-drawn ASCII table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub shared: SharedArgs,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Read a header line and data rows from a file or standard input (default)
    Render {
        /// Read from this file instead of standard input
        #[clap(short, long)]
        input: Option<PathBuf>,
    },

    /// Enter the table cell by cell; the first row holds the headers
    Grid {
        /// Number of columns
        #[clap(short, long)]
        columns: usize,

        /// Number of data rows (asks after each row when omitted)
        #[clap(short, long)]
        rows: Option<usize>,
    },

    /// Show which clipboard backend would be used
    Clipboard,
}

#[derive(Args, Clone, Debug, Default)]
pub struct SharedArgs {
    /// Copy the rendered table to the clipboard
    #[clap(long, global = true, default_value_t = false)]
    pub copy: bool,

    /// Clipboard backend to use
    #[clap(long, global = true, value_enum)]
    pub clipboard: Option<Backend>,

    /// Use the X11 primary selection instead of the clipboard
    #[clap(long, global = true, default_value_t = false)]
    pub primary: bool,

    /// What to do when a data row has fewer cells than there are headers
    #[clap(long, global = true, value_enum)]
    pub missing_cells: Option<MissingCells>,

    /// Minimum column width
    #[clap(long, global = true)]
    pub min_width: Option<usize>,

    /// Configuration file (defaults to ./boxtab.toml, then the user config directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output on standard error
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}
