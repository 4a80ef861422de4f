use chrono::NaiveDateTime;

use crate::CatalogEntry;

const FALLBACK_STORE_URL: &str = "https://store.epicgames.com/free-games";
const NO_DESCRIPTION: &str = "no description";

/// A render-ready free-game notification derived from one catalog entry.
///
/// Built with `Announcement::from_entry`, rendered with
/// `Announcement::render_html`, sent once, then discarded. Nothing is kept
/// across runs, so re-running the program re-announces the same games.
#[derive(Debug)]
pub struct Announcement {
    /// Title as reported by the promotions feed.
    pub title: String,
    /// Title from the locale-specific content endpoint, when it exists.
    pub localized_title: Option<String>,
    /// Marketing description, or a placeholder when the feed has none.
    pub description: String,
    /// Claim link on the store, or the generic free-games page.
    pub link: String,
    /// Slug the link was built from, kept for the localized-title lookup.
    pub slug: Option<String>,
    /// Human-readable end of the giveaway window.
    pub ends_at: String,
    /// Cover image for the message preview.
    pub image_url: Option<String>,
}

impl Announcement {
    /// Classifies a catalog entry and extracts the display fields.
    ///
    /// Returns `None` for entries with no promotions block, no current
    /// offer list, or no offer at exactly 0% discount. The group scan is
    /// exhaustive: within a group the first zero-discount offer ends the
    /// group and supplies the end date, but remaining groups are still
    /// scanned and a later qualifying group overwrites the captured date.
    pub fn from_entry(entry: &CatalogEntry) -> Option<Self> {
        let promotions = entry.promotions.as_ref()?;
        let groups = match &promotions.promotional_offers {
            Some(groups) if !groups.is_empty() => groups,
            _ => return None,
        };

        let mut free = false;
        let mut end_date = None;
        for group in groups {
            for offer in &group.promotional_offers {
                if offer.discount_setting.discount_percentage == Some(0) {
                    free = true;
                    end_date = offer.end_date.clone();
                    break;
                }
            }
        }
        if !free {
            return None;
        }

        let slug = entry.slug().map(str::to_owned);
        let link = match &slug {
            Some(slug) => format!("https://store.epicgames.com/p/{slug}"),
            None => FALLBACK_STORE_URL.to_owned(),
        };

        Some(Announcement {
            title: entry.title.clone(),
            localized_title: None,
            description: entry
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            link,
            slug,
            ends_at: format_end_date(end_date.as_deref()),
            image_url: entry.promo_image().map(str::to_owned),
        })
    }
}

/// Renders the end timestamp for display.
///
/// Fractional seconds are cut at the first `.` and the rest is parsed as
/// `YYYY-MM-DDTHH:MM:SS`. A string that does not parse is shown verbatim;
/// a missing timestamp shows as `unknown`.
fn format_end_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "unknown".to_owned();
    };
    let trimmed = raw.split('.').next().unwrap_or(raw);
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(end) => end.format("%Y-%m-%d %H:%M (UTC)").to_string(),
        Err(_) => raw.to_owned(),
    }
}
