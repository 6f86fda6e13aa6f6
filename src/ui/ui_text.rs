use crate::catalog::{ListingImage, PlatformIcon};

// Icon glyphs. Everything here comes from egui's built-in emoji subset so we
// don't have to ship a font.
pub const ICON_SWAP: &str = "⮪";
pub const ICON_BRAIN: &str = "💡";
pub const ICON_SHIELD: &str = "🛡";
pub const ICON_LOCK: &str = "🔒";
pub const ICON_DRUM: &str = "🛢";
pub const ICON_CHART: &str = "📈";
pub const ICON_REFINERY: &str = "🏭";
pub const ICON_WALLET: &str = "💳";

/// Glyph for a platform-feature icon id. The model carries the id; only the
/// presentation layer knows about glyphs.
pub fn platform_icon_glyph(icon: PlatformIcon) -> &'static str {
    match icon {
        PlatformIcon::Swap => ICON_SWAP,
        PlatformIcon::Brain => ICON_BRAIN,
        PlatformIcon::Shield => ICON_SHIELD,
        PlatformIcon::Lock => ICON_LOCK,
    }
}

/// Glyph painted onto the artwork placeholder for a listing image id.
pub fn listing_image_glyph(image: ListingImage) -> &'static str {
    match image {
        ListingImage::OilDrum => ICON_DRUM,
        ListingImage::PriceChart => ICON_CHART,
        ListingImage::Refinery => ICON_REFINERY,
    }
}

pub struct UiText {
    pub brand: &'static str,
    pub tagline: &'static str,

    pub nav_home: &'static str,
    pub nav_marketplace: &'static str,
    pub nav_buy: &'static str,
    pub nav_sell: &'static str,

    pub hero_title: &'static str,
    pub hero_body: &'static str,
    pub btn_explore: &'static str,

    pub section_featured: &'static str,
    pub section_platform: &'static str,

    pub label_seller: &'static str,
    pub label_quantity: &'static str,
    pub label_barrels: &'static str,
    pub btn_buy_now: &'static str,

    pub trade_size_heading: &'static str,
    pub trade_sized_prefix: &'static str,
    pub trade_unsized_hint: &'static str,
    pub trade_connect_hint: &'static str,

    pub nf_code: &'static str,
    pub nf_title: &'static str,
    pub nf_body: &'static str,
    pub btn_go_home: &'static str,

    pub footer_rights: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    brand: "TardFi",
    tagline: "Where Oil meets blockchain",

    nav_home: "Home",
    nav_marketplace: "Marketplace",
    nav_buy: "Buy",
    nav_sell: "Sell",

    hero_title: "Revolutionize Oil Trading\nwith AI & Web3",
    hero_body: "Trade oil smarter, faster, and more securely. Experience real-time \
market insights, AI-driven decisions, and a decentralized marketplace all in \
one sleek platform.",
    btn_explore: "Explore",

    section_featured: "Feature Marketplace",
    section_platform: "TardFi Features",

    label_seller: "Seller",
    label_quantity: "Quantity",
    label_barrels: "barrels",
    btn_buy_now: "Buy now",

    trade_size_heading: "Size your order",
    trade_sized_prefix: "Order size",
    trade_unsized_hint: "Pick a percentage of the available quantity.",
    trade_connect_hint: "Connect your wallet to trade this lot.",

    nf_code: "404",
    nf_title: "Page Not Found",
    nf_body: "Sorry, the page you are looking for does not exist or has been moved.",
    btn_go_home: "Go Home",

    footer_rights: "© TardFi. All rights reserved.",
};
