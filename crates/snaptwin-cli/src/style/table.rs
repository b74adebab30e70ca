//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use snaptwin_kernel::Property;

use super::colors::SemanticStyle;

/// Creates a styled table of nameplate properties.
pub fn property_table(properties: &[Property]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Property", "Value", "Unit"]
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for prop in properties {
        table.add_row(vec![
            prop.id_short.as_str(),
            prop.value.as_str(),
            prop.unit().unwrap_or("-"),
        ]);
    }

    table
}

/// Prints nameplate properties as a formatted table.
pub fn print_property_table(properties: &[Property]) {
    if properties.is_empty() {
        println!("{}", "Nameplate is empty.".muted());
        return;
    }

    println!("{}", property_table(properties));

    let count = properties.len();
    let word = if count == 1 { "property" } else { "properties" };
    println!("{}", format!("({count} {word})").muted());
}

/// Creates a key-value info table (two columns: key and value).
pub fn info_table(entries: &[(&str, &str)]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (key, value) in entries {
        let key_cell = if super::no_color() {
            Cell::new(key)
        } else {
            Cell::new(key).fg(Color::DarkGrey)
        };
        table.add_row(vec![key_cell, Cell::new(value)]);
    }

    table
}

/// Prints a key-value info table.
pub fn print_info_table(entries: &[(&str, &str)]) {
    println!("{}", info_table(entries));
}
