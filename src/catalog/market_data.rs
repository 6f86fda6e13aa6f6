//! The static lot table. A remote catalog feed will replace this; everything
//! upstream already goes through `ListingCatalog` so only this file changes.

use crate::catalog::listing::{Listing, ListingImage};

const SELLER: &str = "Global Energy Ltd.";

pub(crate) const MARKET_DATA: &[Listing] = &[
    Listing { id: 1, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::OilDrum },
    Listing { id: 2, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::PriceChart },
    Listing { id: 3, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::Refinery },
    Listing { id: 4, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::OilDrum },
    Listing { id: 5, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::PriceChart },
    Listing { id: 6, location: "Nigeria Oil & Gas", seller: SELLER, quantity: "3400", image: ListingImage::OilDrum },
    Listing { id: 7, location: "Brent Crude", seller: SELLER, quantity: "3000", image: ListingImage::Refinery },
    Listing { id: 8, location: "West Texas Intermediate", seller: SELLER, quantity: "3000", image: ListingImage::PriceChart },
    Listing { id: 9, location: "OPEC Basket", seller: SELLER, quantity: "3000", image: ListingImage::OilDrum },
    Listing { id: 10, location: "Brent Crude", seller: SELLER, quantity: "3000", image: ListingImage::Refinery },
    Listing { id: 11, location: "Dubai Crude", seller: SELLER, quantity: "3000", image: ListingImage::OilDrum },
    Listing { id: 12, location: "West Texas Intermediate", seller: SELLER, quantity: "200", image: ListingImage::PriceChart },
    Listing { id: 13, location: "West Texas Intermediate", seller: SELLER, quantity: "1500", image: ListingImage::Refinery },
    Listing { id: 14, location: "West Texas Intermediate", seller: SELLER, quantity: "500", image: ListingImage::OilDrum },
    Listing { id: 15, location: "West Texas Intermediate", seller: SELLER, quantity: "3900", image: ListingImage::PriceChart },
    Listing { id: 16, location: "West Texas Intermediate", seller: SELLER, quantity: "1000", image: ListingImage::OilDrum },
];
