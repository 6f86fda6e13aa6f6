//! Home-page content entries. Icons are tagged variants over a closed set;
//! the screen picks the actual glyph so this model never touches the UI.

use strum_macros::{Display, EnumIter};

use crate::catalog::listing::ListingImage;

/// Closed icon set for the platform feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PlatformIcon {
    Swap,
    Brain,
    Shield,
    Lock,
}

/// One tile in the "Feature marketplace" strip.
pub struct FeatureEntry {
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
    pub image: ListingImage,
}

/// One card in the platform features section.
pub struct PlatformFeature {
    pub id: u32,
    pub icon: PlatformIcon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        id: 1,
        title: "Brent crude oil",
        desc: "The global benchmark for crude oil",
        image: ListingImage::PriceChart,
    },
    FeatureEntry {
        id: 2,
        title: "Brent crude oil",
        desc: "The global benchmark for crude oil",
        image: ListingImage::OilDrum,
    },
    FeatureEntry {
        id: 3,
        title: "Brent crude oil",
        desc: "The global benchmark for crude oil",
        image: ListingImage::Refinery,
    },
    FeatureEntry {
        id: 4,
        title: "Brent crude oil",
        desc: "The global benchmark for crude oil",
        image: ListingImage::PriceChart,
    },
];

pub const PLATFORM_FEATURES: &[PlatformFeature] = &[
    PlatformFeature {
        id: 1,
        icon: PlatformIcon::Swap,
        title: "Decentralized Trading",
        desc: "Trade directly with other users without intermediaries, ensuring greater control and efficiency.",
    },
    PlatformFeature {
        id: 2,
        icon: PlatformIcon::Brain,
        title: "AI Forecasting",
        desc: "Leverage advanced AI algorithms for predictive market analysis and personalized trading strategies.",
    },
    PlatformFeature {
        id: 3,
        icon: PlatformIcon::Shield,
        title: "Secure Wallet",
        desc: "Safeguard your assets with our integrated secure wallet, designed for web3 security.",
    },
    PlatformFeature {
        id: 4,
        icon: PlatformIcon::Lock,
        title: "Transparent Transactions",
        desc: "Benefit from the transparency of blockchain technology.",
    },
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::ui::platform_icon_glyph;

    #[test]
    fn every_platform_icon_has_a_glyph() {
        for icon in PlatformIcon::iter() {
            assert!(!platform_icon_glyph(icon).is_empty(), "{icon} has no glyph");
        }
    }

    #[test]
    fn feature_ids_are_unique_within_their_table() {
        let platform: std::collections::HashSet<u32> =
            PLATFORM_FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(platform.len(), PLATFORM_FEATURES.len());

        let features: std::collections::HashSet<u32> = FEATURES.iter().map(|f| f.id).collect();
        assert_eq!(features.len(), FEATURES.len());
    }
}
