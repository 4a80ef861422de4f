use serde::Deserialize;

/// One product record from the promotions feed.
///
/// Fields are lenient on purpose: a single odd record in the feed should
/// never fail the whole batch, so everything falls back to its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Display title of the game.
    pub title: String,
    /// Short marketing description, missing for some entries.
    pub description: Option<String>,
    /// URL-safe product identifier used to build the claim link.
    pub product_slug: Option<String>,
    /// Alternative slug field, used when `productSlug` is absent or empty.
    pub url_slug: Option<String>,
    /// Cover art and thumbnails, tagged by type.
    pub key_images: Vec<KeyImage>,
    /// Promotion data, absent for entries that are not on promotion.
    pub promotions: Option<Promotions>,
}

impl CatalogEntry {
    /// First non-empty of `productSlug` and `urlSlug`.
    pub fn slug(&self) -> Option<&str> {
        self.product_slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
            .or_else(|| self.url_slug.as_deref().filter(|slug| !slug.is_empty()))
    }

    /// Picks the image used for the message preview.
    ///
    /// A `Thumbnail` anywhere in the list wins immediately; without one,
    /// the last `OfferImageWide` in iteration order survives.
    pub fn promo_image(&self) -> Option<&str> {
        let mut wide = None;
        for image in &self.key_images {
            match image.kind.as_str() {
                "Thumbnail" => return Some(&image.url),
                "OfferImageWide" => wide = Some(image.url.as_str()),
                _ => {}
            }
        }
        wide
    }
}

/// An image descriptor attached to a catalog entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeyImage {
    /// Image type tag, e.g. `Thumbnail` or `OfferImageWide`.
    #[serde(rename = "type")]
    pub kind: String,
    /// URL of the image.
    pub url: String,
}

/// The promotions block of a catalog entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Promotions {
    /// Currently running offers, grouped; absent or empty when nothing is
    /// on promotion right now.
    pub promotional_offers: Option<Vec<OfferGroup>>,
}

/// A group of promotional offers running in the same window.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferGroup {
    /// The offers in this group.
    pub promotional_offers: Vec<Offer>,
}

/// A single promotional price entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offer {
    /// End of the promotion window, ISO-8601 with fractional seconds.
    pub end_date: Option<String>,
    /// The discount applied by this offer.
    pub discount_setting: DiscountSetting,
}

/// Discount details of an offer. A percentage of exactly `0` means the
/// game is claimable for free.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscountSetting {
    pub discount_percentage: Option<u32>,
}
