use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::CatalogEntry;

const PROMOTIONS_ENDPOINT: &str =
    "https://store-site-backend-static.ak.epicgames.com/freeGamesPromotions";

/// Why a catalog fetch produced no entries.
///
/// The caller is expected to log the error and carry on as if the feed were
/// empty; nothing here aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid promotions URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request to the promotions endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("promotions response is not valid JSON: {0}")]
    Decode(serde_json::Error),
    #[error("promotions response is missing the expected catalog structure: {0}")]
    Shape(serde_json::Error),
}

/// The current free-games promotions feed.
///
/// Use the `FreeGamesCatalog::fetch` method to download and decode the feed.
#[derive(Debug)]
pub struct FreeGamesCatalog {
    /// URL the feed was fetched from.
    pub endpoint: String,
    /// All catalog entries in the feed, free or not.
    pub entries: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct PromotionsResponse {
    data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "Catalog")]
    catalog: CatalogNode,
}

#[derive(Deserialize)]
struct CatalogNode {
    #[serde(rename = "searchStore")]
    search_store: SearchStore,
}

#[derive(Deserialize)]
struct SearchStore {
    elements: Vec<CatalogEntry>,
}

impl FreeGamesCatalog {
    /// Fetches the promotions feed, optionally for a specific locale.
    pub async fn fetch(locale: Option<&str>) -> Result<Self, FetchError> {
        let url = match locale {
            Some(locale) => {
                Url::parse_with_params(PROMOTIONS_ENDPOINT, &[("locale", locale)])?
            }
            None => Url::parse(PROMOTIONS_ENDPOINT)?,
        };

        let response = Client::new().get(url.to_owned()).send().await?;
        let body = response.text().await?;

        Ok(FreeGamesCatalog {
            endpoint: url.into(),
            entries: parse_feed(&body)?,
        })
    }
}

/// Decodes the feed body, distinguishing a non-JSON payload from a JSON
/// payload with the wrong structure.
fn parse_feed(body: &str) -> Result<Vec<CatalogEntry>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(FetchError::Decode)?;
    let parsed: PromotionsResponse =
        serde_json::from_value(value).map_err(FetchError::Shape)?;
    Ok(parsed.data.catalog.search_store.elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_feed() {
        let body = serde_json::json!({
            "data": {
                "Catalog": {
                    "searchStore": {
                        "elements": [
                            {"title": "First"},
                            {"title": "Second"},
                        ]
                    }
                }
            }
        })
        .to_string();
        let entries = parse_feed(&body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "First");
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = parse_feed("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_catalog_path_is_a_shape_error() {
        let body = serde_json::json!({"data": {"Catalog": {}}}).to_string();
        let err = parse_feed(&body).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }
}
