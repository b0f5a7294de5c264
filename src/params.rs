// src/params.rs

/// The site caches one static document per language and day.
pub const BASE_URL: &str =
    "https://www.studierendenwerk-goettingen.de/fileadmin/templates/php/mensaspeiseplan/cached";

/// `{base}/{lang}/{date}/alle.html` — all canteens in one document.
pub fn menu_url(base: &str, lang: &str, iso_date: &str) -> String {
    format!("{base}/{lang}/{iso_date}/alle.html")
}
