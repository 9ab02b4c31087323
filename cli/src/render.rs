use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clipboard::Clipboard;
use table::{NO_INPUT_DATA, RenderOptions, TableError};

use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::ui;

/// What a text run produced
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Table(String),
    NoInput,
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Table(table) => table.as_str(),
            Output::NoInput => NO_INPUT_DATA,
        }
    }
}

/// Render text input. A missing header line is reported as `Output::NoInput`.
pub fn render_input(input: &str, options: &RenderOptions) -> Result<Output> {
    match table::render_text(input, options) {
        Ok(table) => Ok(Output::Table(table)),
        Err(err) if err.root() == &TableError::InvalidHeaderSpec => Ok(Output::NoInput),
        Err(err) => Err(err.into()),
    }
}

fn read_input(input: Option<&Path>, verbose: bool) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            if verbose && atty::is(atty::Stream::Stdin) {
                ui::info_message("Reading table from standard input, finish with Ctrl-D");
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| "Failed to read standard input")?;
            Ok(buffer)
        }
    }
}

/// Write the table to standard output, without a trailing newline
pub fn write_table(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Copy a rendered table. Failures are reported and never abort the run.
pub fn copy_table(clipboard: &dyn Clipboard, text: &str, verbose: bool) {
    match clipboard.copy(text) {
        Ok(()) => {
            if verbose {
                ui::success_message(&format!("Copied table using {}", clipboard.name()));
            }
        }
        Err(err) => ui::warning_message(&format!("Table not copied: {}", err.user_message())),
    }
}

pub fn execute(input: Option<&Path>, settings: &Settings, clipboard: &dyn Clipboard) -> Result<()> {
    let text = read_input(input, settings.verbose)?;
    let output = render_input(&text, &settings.options)?;

    write_table(output.text())?;

    if let Output::Table(table) = &output {
        if settings.copy {
            copy_table(clipboard, table, settings.verbose);
        }
    }

    Ok(())
}
