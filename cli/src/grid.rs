use clipboard::Clipboard;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use table::Table;

use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::render::{copy_table, write_table};
use crate::ui;

/// Collect a grid of cells. Row 0 is the header row.
///
/// `read_cell(row, column)` supplies each value. With a fixed `rows` count
/// exactly that many data rows are read, otherwise `more_rows` is asked after
/// each data row.
pub fn collect_grid<R, M>(
    columns: usize,
    rows: Option<usize>,
    mut read_cell: R,
    mut more_rows: M,
) -> Result<Vec<Vec<String>>>
where
    R: FnMut(usize, usize) -> Result<String>,
    M: FnMut() -> Result<bool>,
{
    if columns == 0 {
        return Err(CliError::Other("A table needs at least one column".to_string()));
    }

    let read_row = |row: usize, read_cell: &mut R| -> Result<Vec<String>> {
        (0..columns).map(|column| read_cell(row, column)).collect()
    };

    let mut grid = vec![read_row(0, &mut read_cell)?];
    match rows {
        Some(count) => {
            for row in 1..=count {
                grid.push(read_row(row, &mut read_cell)?);
            }
        }
        None => loop {
            let row = grid.len();
            grid.push(read_row(row, &mut read_cell)?);
            if !more_rows()? {
                break;
            }
        },
    }

    Ok(grid)
}

fn prompt_label(grid_headers: &[String], row: usize, column: usize) -> String {
    if row == 0 {
        return format!("Header {}", column + 1);
    }
    match grid_headers.get(column).map(|name| name.trim()) {
        Some(name) if !name.is_empty() => format!("Row {} / {}", row, name),
        _ => format!("Row {} / column {}", row, column + 1),
    }
}

pub fn execute(
    columns: usize,
    rows: Option<usize>,
    settings: &Settings,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    ui::section_header("Table entry");

    let mut headers: Vec<String> = Vec::new();
    let grid = collect_grid(
        columns,
        rows,
        |row, column| {
            let value: String = Input::with_theme(&theme)
                .with_prompt(prompt_label(&headers, row, column))
                .allow_empty(true)
                .interact_text()?;
            if row == 0 {
                headers.push(value.clone());
            }
            Ok(value)
        },
        || {
            Confirm::with_theme(&theme)
                .with_prompt("Add another row?")
                .default(true)
                .interact()
                .map_err(CliError::from)
        },
    )?;

    let table = Table::from_grid(&grid, &settings.options)?;
    let rendered = table.render_with(&settings.options)?;

    write_table(&rendered)?;
    if settings.copy {
        copy_table(clipboard, &rendered, settings.verbose);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(values: &[&str]) -> impl FnMut(usize, usize) -> Result<String> {
        let mut values: Vec<String> = values.iter().rev().map(|v| v.to_string()).collect();
        move |_, _| Ok(values.pop().unwrap_or_default())
    }

    #[test]
    fn test_fixed_row_count() {
        let grid = collect_grid(2, Some(1), scripted(&["Name", "Qty", "pear", "12"]), || {
            panic!("row count is fixed")
        })
        .unwrap();

        assert_eq!(grid, vec![vec!["Name", "Qty"], vec!["pear", "12"]]);
    }

    #[test]
    fn test_asks_for_more_rows() {
        let mut answers = vec![false, true];
        let grid = collect_grid(1, None, scripted(&["Id", "1", "2"]), || {
            Ok(answers.pop().unwrap_or(false))
        })
        .unwrap();

        assert_eq!(grid, vec![vec!["Id"], vec!["1"], vec!["2"]]);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = collect_grid(0, Some(1), scripted(&[]), || Ok(false));
        assert!(result.is_err());
    }

    #[test]
    fn test_collected_grid_renders() {
        let grid = collect_grid(2, Some(1), scripted(&["[A]", "B", "x", "y"]), || Ok(false))
            .unwrap();
        let table = Table::from_grid(&grid, &Default::default()).unwrap();

        assert_eq!(
            table.render().unwrap(),
            ".----+----.\n| A  | B  |\n|----+----|\n| x  | y  |\n'----+----'"
        );
    }

    #[test]
    fn test_prompt_labels() {
        let headers = vec!["Name".to_string(), " ".to_string()];
        assert_eq!(prompt_label(&headers, 0, 1), "Header 2");
        assert_eq!(prompt_label(&headers, 2, 0), "Row 2 / Name");
        assert_eq!(prompt_label(&headers, 1, 1), "Row 1 / column 2");
    }
}
