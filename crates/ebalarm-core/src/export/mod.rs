//! # Export Module
//!
//! Serializes alarms into the EasyBuilder Pro alarm import sheet.
//!
//! Layout of the single worksheet:
//!
//! | row | content                                              |
//! |-----|------------------------------------------------------|
//! | 0   | `VERSION`, `4`, `HARDWARE_VERSION`, `159`            |
//! | 1   | [`template::HEADERS`]                                |
//! | 2.. | one [`template::ROW_TEMPLATE`] row per alarm, in order |

pub mod template;
mod writer;

use crate::category::{Alarm, CategoryStyle, StyleTable};

use template::{Cell, ROW_TEMPLATE};

pub use writer::write_report;

/// Row index of the header labels
pub const HEADER_ROW: u32 = 1;
/// Row index of the first alarm
pub const FIRST_DATA_ROW: u32 = 2;

/// Render the cells of one alarm row.
///
/// The background color comes from `styles` by category id, or from the
/// alarm's own category when the table has no entry for it.
pub fn render_row(alarm: &Alarm, plc_name: &str, styles: &StyleTable) -> Vec<String> {
    let category = alarm.category();
    let style = styles
        .get(category.id())
        .copied()
        .unwrap_or_else(|| category.style());

    ROW_TEMPLATE
        .iter()
        .map(|cell| render_cell(*cell, alarm, plc_name, &style))
        .collect()
}

fn render_cell(cell: Cell, alarm: &Alarm, plc_name: &str, style: &CategoryStyle) -> String {
    match cell {
        Cell::Text(text) => text.to_string(),
        Cell::CategoryLabel => alarm.category().label(),
        Cell::PlcName => plc_name.to_string(),
        Cell::Address => alarm.symbol().name().to_string(),
        Cell::Message => alarm.symbol().comment().to_string(),
        Cell::BackgroundColor => style.background.to_string(),
    }
}

/// Data rows with their sheet row index, starting at [`FIRST_DATA_ROW`].
pub fn report_rows<'a>(
    plc_name: &'a str,
    alarms: &'a [Alarm],
    styles: &'a StyleTable,
) -> impl Iterator<Item = (u32, Vec<String>)> + 'a {
    (FIRST_DATA_ROW..)
        .zip(alarms)
        .map(move |(row, alarm)| (row, render_row(alarm, plc_name, styles)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{classify_all, CategoryRegistry, CategorySettings, Rgb};
    use crate::import::{SymbolReader, TabDelimitedReader};
    use crate::symbol::Symbol;
    use std::io::Cursor;

    fn registry(filters: &[(&str, Rgb)]) -> CategoryRegistry {
        let settings: Vec<CategorySettings> = filters
            .iter()
            .map(|(filter, bg_color)| CategorySettings {
                filter: filter.to_string(),
                bg_color: *bg_color,
                ..Default::default()
            })
            .collect();
        CategoryRegistry::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_render_row_variable_columns() {
        let registry = registry(&[("TAG1", Rgb(165, 42, 42))]);
        let id = registry.get(0).unwrap().id();
        let symbols = TabDelimitedReader
            .read_symbols(&mut Cursor::new("TAG1\tBOOL\tunused\tHello\\nWorld"))
            .unwrap();
        let alarms = classify_all(symbols, &registry);
        assert_eq!(alarms[0].symbol().comment(), "Hello\nWorld");

        let row = render_row(&alarms[0], "PZ_PLC", &registry.style_table());
        assert_eq!(row.len(), template::COLUMN_COUNT);
        assert_eq!(row[0], format!("{id}: Category {id}"));
        assert_eq!(row[1], "Low");
        assert_eq!(row[3], "PZ_PLC");
        assert_eq!(row[7], "TAG1");
        assert_eq!(row[20], "Hello\nWorld");
        assert_eq!(row[24], template::DEFAULT_FONT_COLOR);
        assert_eq!(row[128], "PZ_PLC");
        assert_eq!(row[132], "TAG1");
        assert_eq!(row[168], "(165, 42, 42)");
    }

    #[test]
    fn test_style_table_overrides_category_colors() {
        let registry = registry(&[("X", Rgb::RED)]);
        let alarms = classify_all(vec![Symbol::new("X1", "BOOL", "")], &registry);
        let id = alarms[0].category().id();

        let mut styles = StyleTable::default();
        styles.insert(
            id,
            CategoryStyle {
                background: Rgb(0, 0, 255),
                foreground: Rgb::WHITE,
            },
        );
        let row = render_row(&alarms[0], "PLC", &styles);
        assert_eq!(row[168], "(0, 0, 255)");

        let fallback = render_row(&alarms[0], "PLC", &StyleTable::default());
        assert_eq!(fallback[168], "(255, 0, 0)");
    }

    #[test]
    fn test_row_count_matches_classified_symbols() {
        let registry = registry(&[("Def", Rgb::RED), ("Avert", Rgb(255, 215, 0))]);
        let symbols = vec![
            Symbol::new("stS1Def.a", "BOOL", "a"),
            Symbol::new("stS1Counter", "INT", "b"),
            Symbol::new("stS1Avert.c", "BOOL", "c"),
            Symbol::new("stS2Def.d", "BOOL", "d"),
        ];
        let alarms = classify_all(symbols.clone(), &registry);
        let styles = registry.style_table();

        let rows: Vec<u32> = report_rows("PLC", &alarms, &styles).map(|(row, _)| row).collect();
        assert_eq!(rows, vec![2, 3, 4]);

        let again = classify_all(symbols, &registry);
        assert_eq!(report_rows("PLC", &again, &styles).count(), rows.len());
    }

    #[test]
    fn test_rows_follow_alarm_order() {
        let registry = registry(&[(".", Rgb::RED)]);
        let alarms = classify_all(
            vec![Symbol::new("B", "BOOL", ""), Symbol::new("A", "BOOL", "")],
            &registry,
        );
        let styles = registry.style_table();
        let addresses: Vec<String> = report_rows("PLC", &alarms, &styles)
            .map(|(_, cells)| cells[7].clone())
            .collect();
        assert_eq!(addresses, vec!["B", "A"]);
    }
}
