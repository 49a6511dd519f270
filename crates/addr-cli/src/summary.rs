//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_cli::pipeline::FileReport;

pub fn print_file_summary(report: &FileReport) {
    println!("Input: {}", report.input.display());
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: -"),
    }

    if report.columns.is_empty() {
        println!("No address columns were found; nothing was normalized.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Normalized As"),
        header_cell("Cells"),
        header_cell("Changed"),
        header_cell("Blank"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_cells = 0usize;
    let mut total_changed = 0usize;
    let mut total_blank = 0usize;
    for column in &report.columns {
        total_cells += column.cells;
        total_changed += column.changed;
        total_blank += column.blank;
        table.add_row(vec![
            Cell::new(&column.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&column.normalized_column),
            Cell::new(column.cells),
            count_cell(column.changed, Color::Green),
            count_cell(column.blank, Color::DarkGrey),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} rows", report.rows)),
        Cell::new(total_cells).add_attribute(Attribute::Bold),
        count_cell(total_changed, Color::Green).add_attribute(Attribute::Bold),
        count_cell(total_blank, Color::DarkGrey).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
