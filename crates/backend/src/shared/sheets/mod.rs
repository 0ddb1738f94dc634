pub mod auth;
pub mod client;

use once_cell::sync::Lazy;

pub use client::{SheetsApiClient, SheetsBackend};

static HTTP: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Shared outbound HTTP client for token exchange and values calls.
pub(crate) fn http_client() -> &'static reqwest::Client {
    &HTTP
}
