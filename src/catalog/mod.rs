mod features;
mod listing;
mod market_data;

pub use features::{FEATURES, FeatureEntry, PLATFORM_FEATURES, PlatformFeature, PlatformIcon};
pub use listing::{Listing, ListingCatalog, ListingImage};
