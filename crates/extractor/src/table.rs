//! Data-view table extraction

use crate::record::MoveRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Rows of the page's data-view table
const ROW_SELECTOR: &str = "table.views-table tbody tr";

// Cell selectors, in storage column order. Cells are addressed by their
// `headers` attribute, which the page keeps stable across layout tweaks.
const NAME_CELL: &str = r#"td[headers="view-title-table-column"]"#;
const TYPE_CELL: &str = r#"td[headers="view-field-move-element-table-column"]"#;
const POWER_CELL: &str = r#"td[headers="view-field-move-damage-table-column"]"#;
const ENERGY_CELL: &str = r#"td[headers="view-field-energy-delta-table-column"]"#;
const DPS_CELL: &str = r#"td[headers="view-field-move-dps-table-column"]"#;
const EPS_CELL: &str = r#"td[headers="view-field-move-energy-per-second-table-column"]"#;
const COOLDOWN_CELL: &str = r#"td[headers="view-field-move-cooldown-table-column"]"#;

/// Extractor with the page selectors compiled once
pub struct MoveTableExtractor {
    rows: Selector,
    name: Selector,
    move_type: Selector,
    power: Selector,
    energy_per_use: Selector,
    dps: Selector,
    eps: Selector,
    cooldown: Selector,
}

impl MoveTableExtractor {
    /// Compile the row and cell selectors
    pub fn new() -> Self {
        Self {
            rows: parse_selector(ROW_SELECTOR),
            name: parse_selector(NAME_CELL),
            move_type: parse_selector(TYPE_CELL),
            power: parse_selector(POWER_CELL),
            energy_per_use: parse_selector(ENERGY_CELL),
            dps: parse_selector(DPS_CELL),
            eps: parse_selector(EPS_CELL),
            cooldown: parse_selector(COOLDOWN_CELL),
        }
    }

    /// Extract one record per table row, preserving document order
    ///
    /// A row missing a labeled cell gets an empty string for that field
    /// rather than being skipped. An absent table or an empty body
    /// yields an empty vec; the caller decides what that means.
    pub fn extract(&self, html: &str) -> Vec<MoveRecord> {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        for row in document.select(&self.rows) {
            records.push(MoveRecord {
                name: cell_text(row, &self.name),
                move_type: cell_text(row, &self.move_type),
                power: cell_text(row, &self.power),
                energy_per_use: cell_text(row, &self.energy_per_use),
                dps: cell_text(row, &self.dps),
                eps: cell_text(row, &self.eps),
                cooldown: cell_text(row, &self.cooldown),
            });
        }

        if records.is_empty() {
            warn!("No move rows found in document");
        } else {
            debug!("Extracted {} move rows", records.len());
        }
        records
    }
}

impl Default for MoveTableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_selector(css: &str) -> Selector {
    // Selectors are compile-time constants; a parse failure is a bug.
    Selector::parse(css).expect("invalid cell selector")
}

/// Concatenated text of the first matching cell, or empty if absent
fn cell_text(row: ElementRef<'_>, cell: &Selector) -> String {
    row.select(cell)
        .next()
        .map(|td| td.text().collect::<String>())
        .unwrap_or_default()
}
