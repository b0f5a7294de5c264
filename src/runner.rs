// src/runner.rs
//! Top-level runner: one command in, one reply text out.

use std::time::Duration;

use crate::{
    cli::Params,
    config::Config,
    core::net,
    dates,
    error::RunError,
    menu::MenuCatalog,
    params::{menu_url, BASE_URL},
    render,
    resolve::{self, Resolution},
    specs::menus,
};

/// Resolve the date, fetch the day's document, and answer. Outcomes the
/// user can act on (nothing parsed, ambiguous name, unknown name) come
/// back as `Ok` replies; only date and transport failures are errors.
pub fn run(params: &Params, config: &Config) -> Result<String, RunError> {
    let date = dates::resolve_date(params.date_token.as_deref())?;
    let iso_date = date.format("%Y-%m-%d").to_string();

    let lang = params.lang.as_deref().unwrap_or(&config.lang);
    let url = menu_url(BASE_URL, lang, &iso_date);
    log::info!("fetching menu document: {url}");

    let doc = net::http_get(&url, Duration::from_secs(config.request_timeout))?;
    let catalog = menus::parse(&doc);
    log::debug!("parsed {} canteen table(s)", catalog.len());

    Ok(reply_for(params, config, &iso_date, catalog))
}

/// Pure back half of `run`, split off so tests can drive it with a
/// fixture catalog instead of a live fetch.
pub fn reply_for(params: &Params, config: &Config, iso_date: &str, catalog: MenuCatalog) -> String {
    if catalog.is_empty() {
        return "No menus found in the fetched document (structure changed?).".to_string();
    }

    // BTreeMap keys come out sorted; the resolver and listings rely on it.
    let available: Vec<String> = catalog.keys().cloned().collect();

    if params.list_canteens {
        return bullet_list("Available canteens:", &available);
    }

    let query = params
        .canteen_query
        .clone()
        .or_else(|| config.default_canteen.clone())
        .filter(|q| !q.trim().is_empty());
    let Some(query) = query else {
        return "No canteen given and no default_canteen configured.".to_string();
    };

    let max_items = params.max_items.unwrap_or(config.max_items);

    match resolve::resolve(&query, &available) {
        Resolution::Matched(name) => {
            let menu = &catalog[&name];
            render::format_menu(&name, iso_date, menu.date.as_deref(), &menu.items, max_items)
        }
        Resolution::Ambiguous(candidates) => {
            bullet_list("Canteen name is ambiguous. Matches:", &candidates)
        }
        Resolution::NotFound => bullet_list("Canteen not found. Available:", &available),
    }
}

fn bullet_list(head: &str, names: &[String]) -> String {
    let mut out = String::from(head);
    for name in names {
        out.push_str("\n- ");
        out.push_str(name);
    }
    out
}
