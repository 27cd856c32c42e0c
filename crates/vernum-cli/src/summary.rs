use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use vernum_cli::report::{FamilyReport, FilenameReport, VersionReport};

use crate::cli::OutputFormatArg;

pub fn print_filenames(reports: &[FilenameReport], format: OutputFormatArg) -> anyhow::Result<()> {
    if let OutputFormatArg::Json = format {
        return print_json(reports);
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filename"),
        header_cell("Base name"),
        header_cell("Version"),
        header_cell("Extensions"),
        header_cell("Extension"),
        header_cell("Original name"),
    ]);
    apply_table_style(&mut table);
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.filename),
            Cell::new(&report.base_name),
            version_cell(report.version.as_deref()),
            text_cell(&report.extensions),
            text_cell(&report.extension),
            Cell::new(&report.original_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn print_version(report: &VersionReport, format: OutputFormatArg) -> anyhow::Result<()> {
    match format {
        OutputFormatArg::Json => print_json(report),
        OutputFormatArg::Table => {
            println!("{}", report.version);
            Ok(())
        }
    }
}

pub fn print_families(reports: &[FamilyReport], format: OutputFormatArg) -> anyhow::Result<()> {
    if let OutputFormatArg::Json = format {
        return print_json(reports);
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Original name"),
        header_cell("Latest"),
        header_cell("Version"),
        header_cell("Files"),
        header_cell("Modified"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in reports {
        let modified = report
            .latest_modified
            .map(|time| time.format("%Y-%m-%d %H:%M").to_string());
        table.add_row(vec![
            Cell::new(&report.original_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(report.latest.as_deref().unwrap_or("-")),
            version_cell(report.latest_version.as_deref()),
            Cell::new(report.count()),
            modified.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    println!("{} families", reports.len());
    Ok(())
}

pub fn print_latest(report: &FamilyReport, format: OutputFormatArg) -> anyhow::Result<()> {
    match format {
        OutputFormatArg::Json => print_json(report),
        OutputFormatArg::Table => {
            if let Some(path) = &report.latest_path {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn version_cell(version: Option<&str>) -> Cell {
    match version {
        Some(version) => Cell::new(version).fg(Color::Green),
        None => dim_cell("original"),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
