use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use limpa_cli::types::CleanResult;
use limpa_model::{Cell as DataCell, Dataset};

pub fn print_summary(result: &CleanResult, preview_rows: usize) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", report_table(result));

    if preview_rows > 0 && result.dataset.height() > 0 {
        println!();
        println!(
            "Preview (first {} of {} rows):",
            preview_rows.min(result.dataset.height()),
            result.dataset.height()
        );
        println!("{}", preview_table(&result.dataset, preview_rows));
    }
}

fn report_table(result: &CleanResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Status"),
        header_cell("Rewritten"),
        header_cell("Nulls"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for column in &report.columns {
        let status = if column.eligible {
            Cell::new("cleaned").fg(Color::Green)
        } else {
            dim_cell("skipped")
        };
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            status,
            count_cell(column.rewritten, Color::Green),
            count_cell(column.nulls, Color::Yellow),
        ]);
    }
    let total_nulls: usize = report.columns.iter().map(|column| column.nulls).sum();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} cleaned / {} skipped",
            report.columns_cleaned(),
            report.columns_skipped()
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(report.cells_rewritten()).add_attribute(Attribute::Bold),
        Cell::new(total_nulls).add_attribute(Attribute::Bold),
    ]);
    table
}

fn preview_table(dataset: &Dataset, rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(dataset.column_names().into_iter().map(header_cell));
    apply_table_style(&mut table);
    for (idx, column) in dataset.columns().iter().enumerate() {
        if column.is_numeric() {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for idx in 0..rows.min(dataset.height()) {
        if let Some(row) = dataset.row(idx) {
            table.add_row(row.into_iter().map(preview_cell));
        }
    }
    table
}

fn preview_cell(cell: &DataCell) -> Cell {
    match cell {
        DataCell::Null => dim_cell("null"),
        other => Cell::new(other),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
