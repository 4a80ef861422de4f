use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Looks up the localized title of a product from the content-detail
/// endpoint.
///
/// This is best-effort enrichment with its own failure domain: any
/// transport error, timeout, non-200 status, undecodable body, or missing
/// title key is treated as "no localized title available".
pub async fn localized_title(slug: &str, locale: &str) -> Option<String> {
    let url =
        format!("https://store-content.ak.epicgames.com/api/{locale}/content/products/{slug}");

    let client = Client::builder()
        .default_headers(crate::build_headers())
        .timeout(Duration::from_secs(5))
        .build()
        .ok()?;

    let response = client.get(url).send().await.ok()?;
    if response.status() != StatusCode::OK {
        return None;
    }

    let body: serde_json::Value = response.json().await.ok()?;
    body.get("productTitle")
        .or_else(|| body.get("title"))
        .and_then(|title| title.as_str())
        .map(str::to_owned)
}
