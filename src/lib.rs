//! Watch the Epic Games Store free-games feed and push Telegram alerts.
//!
//! `FreeGamesCatalog` fetches the current promotions feed, `Announcement`
//! picks out the entries that are free right now and renders a Telegram
//! message for each one, and `TelegramNotifier` delivers them.

mod announcement;
mod catalog;
mod telegram;

pub use announcement::Announcement;
pub use catalog::{localized_title, CatalogEntry, FetchError, FreeGamesCatalog};
use header::{HeaderMap, HeaderValue};
use reqwest::header;
pub use telegram::{NotifyError, TelegramConfig, TelegramNotifier};

/// Builds browser-like headers for the content endpoints that reject the
/// default client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/118.0",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
