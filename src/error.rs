// src/error.rs

use thiserror::Error;

use crate::core::net::FetchError;
use crate::dates::DateError;

/// Failures that abort a run. Everything else (empty catalog, unknown or
/// ambiguous canteen) is an ordinary reply, not an error.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Date(#[from] DateError),
}
