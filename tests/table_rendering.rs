use boxtab_tests::{is_border, lines};
use table::{
    Border, MissingCells, RenderOptions, Table, TableError, parse_headers, parse_rows,
    render_text,
};

const INVENTORY: &str = "[Item] [Quantity] [Id]\nkiwi 3 a1\npear   12   p7\nfig 100 f2";

#[test]
fn test_two_headers_one_row() {
    let headers = parse_headers("[A] [B]").unwrap();
    let labels: Vec<String> = headers.iter().map(|h| h.label()).collect();
    assert_eq!(labels, vec![" A  ", " B  "]);

    let table = Table::new(headers, parse_rows(["x y"]));
    assert_eq!(table.widths(), vec![4, 4]);
    assert_eq!(
        table.render().unwrap(),
        ".----+----.\n| A  | B  |\n|----+----|\n| x  | y  |\n'----+----'"
    );
}

#[test]
fn test_header_count_and_minimum_width() {
    for (line, count) in [("[A]", 1), ("[A] [B]", 2), ("[Alpha] [B] [Gamma] [D]", 4)] {
        let headers = parse_headers(line).unwrap();
        assert_eq!(headers.len(), count);
        for header in &headers {
            assert!(header.label().chars().count() >= 4);
            assert_eq!(header.label().trim(), header.name());
        }
    }
}

#[test]
fn test_borders_match_sum_of_widths() {
    let table = Table::parse_text(INVENTORY, &RenderOptions::default()).unwrap();
    let widths = table.widths();
    let expected = widths.iter().sum::<usize>() + widths.len() + 1;

    let rendered = table.render().unwrap();
    let rendered_lines = lines(&rendered);
    let borders: Vec<&&str> = rendered_lines.iter().filter(|line| is_border(line)).collect();

    // top, one delimiter after the header and after each of the first two rows, bottom
    assert_eq!(borders.len(), 5);
    for border in borders {
        assert_eq!(border.len(), expected);
    }
    for line in rendered_lines {
        assert_eq!(line.chars().count(), expected);
    }
}

#[test]
fn test_pipe_count_per_row() {
    let rendered = render_text(INVENTORY, &RenderOptions::default()).unwrap();

    for line in lines(&rendered).into_iter().filter(|line| !is_border(line)) {
        assert_eq!(line.matches('|').count(), 4, "line: {line}");
    }
}

#[test]
fn test_inventory_layout() {
    let rendered = render_text(INVENTORY, &RenderOptions::default()).unwrap();
    let expected = [
        ".----+--------+----.",
        "|Item|Quantity| Id |",
        "|----+--------+----|",
        "|kiwi|   3    | a1 |",
        "|----+--------+----|",
        "|pear|   12   | p7 |",
        "|----+--------+----|",
        "|fig |  100   | f2 |",
        "'----+--------+----'",
    ]
    .join("\n");

    assert_eq!(rendered, expected);
}

#[test]
fn test_wide_cell_overflows_its_column() {
    let rendered = render_text("[Id]\napple", &RenderOptions::default()).unwrap();
    let rendered_lines = lines(&rendered);

    assert_eq!(rendered_lines[0], ".----.");
    assert_eq!(rendered_lines[3], "|apple|");
}

#[test]
fn test_rendering_twice_is_identical() {
    let options = RenderOptions::default();
    assert_eq!(
        render_text(INVENTORY, &options).unwrap(),
        render_text(INVENTORY, &options).unwrap()
    );
}

#[test]
fn test_single_column_has_one_interior_delimiter() {
    let rendered = render_text("[Only]\nvalue", &RenderOptions::default()).unwrap();
    let middle = Border::Middle.draw(&[4]);

    assert_eq!(lines(&rendered).iter().filter(|line| **line == middle).count(), 1);
    assert_eq!(rendered, ".----.\n|Onl |\n|----|\n|value|\n'----'");
}

#[test]
fn test_empty_header_line_is_rejected() {
    let options = RenderOptions::default();
    let err = render_text("\nx y", &options).unwrap_err();

    assert_eq!(err, TableError::InvalidHeaderSpec);
    assert_eq!(err.user_message(), "ERROR NO INPUT DATA");
}

#[test]
fn test_extra_fields_are_ignored() {
    let rendered = render_text("[A] [B]\na b c", &RenderOptions::default()).unwrap();
    assert_eq!(lines(&rendered)[3], "| a  | b  |");
}

#[test]
fn test_fewer_fields_than_headers() {
    let input = "[A] [B] [C]\na b";

    let err = render_text(input, &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err.root(),
        &TableError::RowCellIndexOutOfRange {
            row: 0,
            column: 2,
            cells: 2,
        }
    );

    let options = RenderOptions::default().with_missing_cells(MissingCells::Blank);
    let rendered = render_text(input, &options).unwrap();
    assert_eq!(lines(&rendered)[3], "| a  | b  |    |");
}

#[test]
fn test_min_width_option_widens_headers() {
    let options = RenderOptions::default().with_min_width(6);
    let rendered = render_text("[A] [B]\nx y", &options).unwrap();

    assert_eq!(
        rendered,
        ".------+------.\n|  A   |  B   |\n|------+------|\n|  x   |  y   |\n'------+------'"
    );
}

#[test]
fn test_grid_and_text_agree() {
    let options = RenderOptions::default();
    let from_text = render_text("[Name] [Qty]\npear 12", &options).unwrap();

    let grid = vec![vec!["Name", "Qty"], vec!["pear", "12"], vec!["", ""]];
    let from_grid = Table::from_grid(&grid, &options)
        .unwrap()
        .render_with(&options)
        .unwrap();

    assert_eq!(from_text, from_grid);
}
