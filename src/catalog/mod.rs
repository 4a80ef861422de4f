mod catalog;
mod entry;
mod localized;

pub use catalog::{FetchError, FreeGamesCatalog};
pub use entry::{CatalogEntry, DiscountSetting, KeyImage, Offer, OfferGroup, Promotions};
pub use localized::localized_title;
