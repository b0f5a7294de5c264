// src/specs/menus.rs
//! Scraping *spec* for the all-canteens menu plan (`alle.html`).
//!
//! Document shape: one `<table class="sp_tab">` block per canteen. The
//! header `<th>` carries the canteen name in a `<strong>` and sometimes
//! a printed date in a `<div class="sp_date">`. Data rows hold a dish
//! type cell (`td.sp_typ`) and a description cell (`td.sp_bez`) whose
//! leading `<strong>` is the dish title.
//!
//! Tolerant by omission: a block without a readable header is dropped
//! whole, a row missing either cell is skipped. Parsing never fails; an
//! unrecognized document is simply an empty catalog.

use crate::core::html::{next_tag_block_ci, slice_between_ci, strip_tags, to_lower};
use crate::core::sanitize::normalize_ws;
use crate::menu::{CanteenMenu, MenuCatalog, MenuItem};

// Template markers, one constant per structural feature we rely on.
const TABLE_OPEN: &str = r#"<table class="sp_tab""#;
const TABLE_CLOSE: &str = "</table>";
const HEADER_OPEN: &str = "<th";
const HEADER_CLOSE: &str = "</th>";
const DATE_OPEN: &str = r#"<div class="sp_date""#;
const DATE_CLOSE: &str = "</div>";
const ROW_OPEN: &str = "<tr";
const ROW_CLOSE: &str = "</tr>";
const TYPE_CELL_OPEN: &str = r#"<td class="sp_typ""#;
const DESC_CELL_OPEN: &str = r#"<td class="sp_bez""#;
const CELL_CLOSE: &str = "</td>";
const EMPHASIS_OPEN: &str = "<strong";
const EMPHASIS_CLOSE: &str = "</strong>";

/// Scan the whole document for canteen tables. A repeated canteen name
/// overwrites the earlier entry; the site is not expected to repeat one.
pub fn parse(doc: &str) -> MenuCatalog {
    let mut catalog = MenuCatalog::new();
    let mut pos = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(doc, TABLE_OPEN, TABLE_CLOSE, pos) {
        let table = &doc[ts..te];
        pos = te;

        let Some((canteen, date)) = canteen_header(table) else {
            continue; // no readable header, drop the whole block
        };
        catalog.insert(canteen, CanteenMenu { date, items: menu_rows(table) });
    }
    catalog
}

/// Canteen name (required) and printed date label (optional) from the
/// first header cell that carries an emphasized name.
fn canteen_header(table: &str) -> Option<(String, Option<String>)> {
    let mut pos = 0usize;
    while let Some((hs, he)) = next_tag_block_ci(table, HEADER_OPEN, HEADER_CLOSE, pos) {
        let header = &table[hs..he];
        pos = he;

        let Some(emph) = slice_between_ci(header, EMPHASIS_OPEN, EMPHASIS_CLOSE) else {
            continue;
        };
        let name = strip_tags(emph);
        if name.is_empty() {
            continue;
        }
        let date = slice_between_ci(header, DATE_OPEN, DATE_CLOSE)
            .map(strip_tags)
            .filter(|d| !d.is_empty());
        return Some((name, date));
    }
    None
}

/// All dish rows of one table, in document order.
fn menu_rows(table: &str) -> Vec<MenuItem> {
    let mut items = Vec::new();
    let mut pos = 0usize;
    while let Some((rs, re)) = next_tag_block_ci(table, ROW_OPEN, ROW_CLOSE, pos) {
        if let Some(item) = item_from_row(&table[rs..re]) {
            items.push(item);
        }
        pos = re;
    }
    items
}

/// One `<tr>` → one item. Header rows and rows missing either cell are
/// skipped, not recorded.
fn item_from_row(row: &str) -> Option<MenuItem> {
    if to_lower(row).contains(HEADER_OPEN) {
        return None;
    }
    let type_cell = slice_between_ci(row, TYPE_CELL_OPEN, CELL_CLOSE)?;
    let desc_cell = slice_between_ci(row, DESC_CELL_OPEN, CELL_CLOSE)?;

    let category = strip_tags(type_cell);
    let full = strip_tags(desc_cell);
    let title = match slice_between_ci(desc_cell, EMPHASIS_OPEN, EMPHASIS_CLOSE) {
        Some(emph) => strip_tags(emph),
        None => full.clone(),
    };

    // Remainder after the title, when the description leads with it.
    let details = if full.starts_with(&title) {
        normalize_ws(&full[title.len()..])
    } else {
        full.clone()
    };
    let details = Some(details).filter(|d| !d.is_empty() && *d != title);

    Some(MenuItem { category, title, details })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(inner: &str) -> String {
        format!(r#"<table class="sp_tab" cellspacing="0">{inner}</table>"#)
    }

    const HEADER: &str = concat!(
        r#"<tr><th colspan="2"><strong>Cafeteria ABC</strong>"#,
        r#"<div class="sp_date">Mi., 06.08.2026</div></th></tr>"#,
    );

    #[test]
    fn empty_document_yields_empty_catalog() {
        assert!(parse("").is_empty());
        assert!(parse("<html><body><p>maintenance</p></body></html>").is_empty());
    }

    #[test]
    fn single_block_single_row() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">VEG</td>\
             <td class=\"sp_bez\"><strong>Veggie Bowl</strong> with rice</td></tr>"
        ));
        let catalog = parse(&doc);
        assert_eq!(catalog.len(), 1);

        let menu = &catalog["Cafeteria ABC"];
        assert_eq!(menu.date.as_deref(), Some("Mi., 06.08.2026"));
        assert_eq!(
            menu.items,
            vec![MenuItem {
                category: "VEG".into(),
                title: "Veggie Bowl".into(),
                details: Some("with rice".into()),
            }]
        );
    }

    #[test]
    fn description_without_emphasis_is_all_title() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">SOUP</td>\
             <td class=\"sp_bez\">Soup of the day</td></tr>"
        ));
        let catalog = parse(&doc);
        let item = &catalog["Cafeteria ABC"].items[0];
        assert_eq!(item.title, "Soup of the day");
        assert_eq!(item.details, None);
    }

    #[test]
    fn details_equal_to_title_are_dropped() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">A</td>\
             <td class=\"sp_bez\"><strong>Eintopf</strong></td></tr>"
        ));
        let catalog = parse(&doc);
        let item = &catalog["Cafeteria ABC"].items[0];
        assert_eq!(item.title, "Eintopf");
        assert_eq!(item.details, None);
    }

    #[test]
    fn description_not_led_by_title_keeps_full_text_as_details() {
        // Title markup sits mid-description; the prefix rule cannot apply.
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">B</td>\
             <td class=\"sp_bez\">Heute: <strong>Schnitzel</strong></td></tr>"
        ));
        let catalog = parse(&doc);
        let item = &catalog["Cafeteria ABC"].items[0];
        assert_eq!(item.title, "Schnitzel");
        assert_eq!(item.details.as_deref(), Some("Heute: Schnitzel"));
    }

    #[test]
    fn rows_missing_either_cell_are_skipped() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">X</td></tr>\
             <tr><td class=\"sp_bez\">orphan description</td></tr>\
             <tr><td class=\"sp_typ\">OK</td><td class=\"sp_bez\">kept</td></tr>"
        ));
        let catalog = parse(&doc);
        let items = &catalog["Cafeteria ABC"].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "OK");
    }

    #[test]
    fn block_without_emphasized_header_is_dropped_whole() {
        let doc = table(
            "<tr><th>Cafeteria ABC</th></tr>\
             <tr><td class=\"sp_typ\">A</td><td class=\"sp_bez\">lost</td></tr>",
        );
        assert!(parse(&doc).is_empty());
    }

    #[test]
    fn date_label_is_optional() {
        let doc = table(
            "<tr><th><strong>Nordmensa</strong></th></tr>\
             <tr><td class=\"sp_typ\">A</td><td class=\"sp_bez\">x</td></tr>",
        );
        let catalog = parse(&doc);
        let menu = &catalog["Nordmensa"];
        assert_eq!(menu.date, None);
        assert_eq!(menu.items.len(), 1);
    }

    #[test]
    fn tables_without_the_menu_marker_are_ignored() {
        let doc = format!(
            "<table class=\"layout\"><tr><th><strong>Not a canteen</strong></th></tr></table>{}",
            table(&format!(
                "{HEADER}<tr><td class=\"sp_typ\">A</td><td class=\"sp_bez\">x</td></tr>"
            ))
        );
        let catalog = parse(&doc);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key("Cafeteria ABC"));
    }

    #[test]
    fn repeated_canteen_name_last_block_wins() {
        let first = table(&format!(
            "{HEADER}<tr><td class=\"sp_typ\">A</td><td class=\"sp_bez\">first</td></tr>"
        ));
        let second = table(&format!(
            "{HEADER}<tr><td class=\"sp_typ\">B</td><td class=\"sp_bez\">second</td></tr>"
        ));
        let catalog = parse(&format!("{first}{second}"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["Cafeteria ABC"].items[0].category, "B");
    }

    #[test]
    fn row_order_is_preserved() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">1</td><td class=\"sp_bez\">a</td></tr>\
             <tr><td class=\"sp_typ\">2</td><td class=\"sp_bez\">b</td></tr>\
             <tr><td class=\"sp_typ\">3</td><td class=\"sp_bez\">c</td></tr>"
        ));
        let catalog = parse(&doc);
        let cats: Vec<_> = catalog["Cafeteria ABC"]
            .items
            .iter()
            .map(|i| i.category.clone())
            .collect();
        assert_eq!(cats, vec!["1", "2", "3"]);
    }

    #[test]
    fn breaks_and_entities_inside_cells_normalize() {
        let doc = table(&format!(
            "{HEADER}\
             <tr><td class=\"sp_typ\">Stamm&nbsp;I</td>\
             <td class=\"sp_bez\"><strong>Currywurst</strong><br/>mit Pommes&nbsp;frites</td></tr>"
        ));
        let catalog = parse(&doc);
        let item = &catalog["Cafeteria ABC"].items[0];
        assert_eq!(item.category, "Stamm I");
        assert_eq!(item.title, "Currywurst");
        assert_eq!(item.details.as_deref(), Some("mit Pommes frites"));
    }
}
