//! Terminal rendering of stars and query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use star_catalog::{QueryResult, Rename};
use star_model::Star;

pub const EMPTY_CATALOG_MESSAGE: &str = "The catalog is empty.";
pub const NO_MATCH_MESSAGE: &str = "No stars match.";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

/// One row per star.
pub fn star_table(stars: &[Star]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Designation"),
        header_cell("Hemisphere"),
        header_cell("Declination"),
        header_cell("RA"),
        header_cell("App. mag"),
        header_cell("Abs. mag"),
        header_cell("Distance (ly)"),
        header_cell("Temp (°C)"),
        header_cell("Mass"),
    ]);
    apply_table_style(&mut table);
    for index in 5..10 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for star in stars {
        table.add_row(vec![
            Cell::new(star.name()).add_attribute(Attribute::Bold),
            Cell::new(star.designation()).fg(Color::Cyan),
            Cell::new(star.hemisphere().as_str()),
            Cell::new(star.declination()),
            Cell::new(star.right_ascension()),
            Cell::new(format!("{:.2}", star.apparent_magnitude())),
            Cell::new(format!("{:.2}", star.absolute_magnitude())),
            Cell::new(format!("{:.2}", star.distance_ly())),
            Cell::new(format!("{:.2}", star.temperature())),
            mass_cell(star),
        ]);
    }
    table
}

/// Multi-line description of a single star.
pub fn star_card(star: &Star) -> String {
    [
        format!("* Name: {}", star.name()),
        format!("* Catalog name: {}", star.designation()),
        format!("* Declination: {}", star.declination()),
        format!("* Right ascension: {}", star.right_ascension()),
        format!("* Apparent magnitude: {:.2}", star.apparent_magnitude()),
        format!("* Absolute magnitude: {:.2}", star.absolute_magnitude()),
        format!("* Distance: {:.2} light years", star.distance_ly()),
        format!("* Constellation: {}", star.constellation()),
        format!("* Hemisphere: {}", star.hemisphere().as_str()),
        format!("* Temperature: {:.2}°C", star.temperature()),
        format!("* Mass: {:.2} solar masses", star.mass()),
    ]
    .join("\n")
}

/// Message for a query that returned nothing, if it did.
pub fn query_message(result: &QueryResult) -> Option<&'static str> {
    if result.is_catalog_empty() {
        Some(EMPTY_CATALOG_MESSAGE)
    } else if result.is_empty() {
        Some(NO_MATCH_MESSAGE)
    } else {
        None
    }
}

pub fn rename_line(rename: &Rename) -> String {
    format!("{}: {} -> {}", rename.name, rename.from, rename.to)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn mass_cell(star: &Star) -> Cell {
    let cell = Cell::new(format!("{:.2}", star.mass()));
    if star.is_supernova_candidate() {
        cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
