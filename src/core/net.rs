// src/core/net.rs

use std::time::Duration;

use thiserror::Error;

/// Error pages can be whole HTML documents; clip what goes into replies.
const BODY_CLIP: usize = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("menu fetch failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// GET `url` and return the body. Non-2xx is an error carrying the
/// status and the clipped body text.
pub fn http_get(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    let body = resp.text()?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: clip(&body, BODY_CLIP),
        });
    }
    Ok(body)
}

fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
