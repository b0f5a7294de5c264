// src/render.rs
//! Reply formatting for one resolved canteen.

use crate::menu::MenuItem;

/// Multi-line menu summary. The header prefers the date label printed in
/// the document and falls back to the requested ISO date. At most
/// `max_items` item lines are emitted; a final line counts what was cut.
pub fn format_menu(
    canteen: &str,
    iso_date: &str,
    parsed_date: Option<&str>,
    items: &[MenuItem],
    max_items: usize,
) -> String {
    let header_date = parsed_date.unwrap_or(iso_date);
    let mut lines = vec![format!("**{canteen}** — {header_date}")];

    if items.is_empty() {
        lines.push("_No items found._".to_string());
        return lines.join("\n");
    }

    for item in items.iter().take(max_items) {
        match &item.details {
            Some(details) => lines.push(format!("- **{}**: {} — {}", item.category, item.title, details)),
            None => lines.push(format!("- **{}**: {}", item.category, item.title)),
        }
    }

    if items.len() > max_items {
        lines.push(format!("_…and {} more._", items.len() - max_items));
    }
    lines.join("\n")
}
