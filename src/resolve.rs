// src/resolve.rs
//! Canteen-name resolution: exact match, then unique substring, then
//! ambiguity. No scoring and no edit distance: the name set is small and
//! stable, and a silent wrong guess is worse than asking the user.

/// Outcome of resolving a user query against the parsed canteen names.
/// Callers must handle all three arms; there is no null-plus-flag shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(String),
    Ambiguous(Vec<String>),
    NotFound,
}

/// Case-insensitive three-tier match of `query` against `available`.
/// Ties on exact equality go to the first name in iteration order, so
/// pass `available` sorted. An empty query never matches.
pub fn resolve(query: &str, available: &[String]) -> Resolution {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Resolution::NotFound;
    }

    for name in available {
        if name.to_lowercase() == q {
            return Resolution::Matched(name.clone());
        }
    }

    let mut hits: Vec<String> = available
        .iter()
        .filter(|name| name.to_lowercase().contains(&q))
        .cloned()
        .collect();

    match hits.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Matched(hits.remove(0)),
        _ => Resolution::Ambiguous(hits),
    }
}
