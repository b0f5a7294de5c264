// src/dates.rs
//! Date-token handling for the command surface: `today`, `tomorrow`, or
//! an ISO `YYYY-MM-DD` literal.

use chrono::{Local, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized date '{0}': use today, tomorrow, or YYYY-MM-DD")]
pub struct DateError(pub String);

/// Whether a command token should be read as a date at all. Tokens that
/// merely look ISO-shaped count, even if the literal turns out invalid;
/// anything else belongs to the canteen query.
pub fn is_date_token(token: &str) -> bool {
    token.eq_ignore_ascii_case("today") || token.eq_ignore_ascii_case("tomorrow") || iso_shaped(token)
}

fn iso_shaped(token: &str) -> bool {
    let b = token.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// `None` means "today". Fails cleanly for anything that is neither a
/// keyword nor a valid ISO literal.
pub fn resolve_date(token: Option<&str>) -> Result<NaiveDate, DateError> {
    let today = Local::now().date_naive();
    match token {
        None => Ok(today),
        Some(t) if t.eq_ignore_ascii_case("today") => Ok(today),
        Some(t) if t.eq_ignore_ascii_case("tomorrow") => Ok(today.succ_opt().unwrap_or(today)),
        Some(t) => NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| DateError(t.to_string())),
    }
}
