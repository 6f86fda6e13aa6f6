use anyhow::{Context, Result};

use crate::catalog::market_data::MARKET_DATA;

/// Closed set of artwork identifiers for listings. The presentation layer
/// resolves these to something paintable; the data model stays free of any
/// UI construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingImage {
    OilDrum,
    PriceChart,
    Refinery,
}

/// One tradable oil lot shown in the marketplace.
/// Immutable once loaded; created at catalog load, never mutated or deleted
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Unique within the catalog.
    pub id: u32,
    pub location: &'static str,
    pub seller: &'static str,
    /// Decimal barrels. Kept as text because it is display-first data;
    /// sizing math goes through `quantity_barrels`.
    pub quantity: &'static str,
    pub image: ListingImage,
}

impl Listing {
    /// Barrels as a number, for the sized-order readout on the trade screen.
    pub fn quantity_barrels(&self) -> Result<f64> {
        self.quantity.trim().parse::<f64>().with_context(|| {
            format!(
                "listing {} has unparseable quantity '{}'",
                self.id, self.quantity
            )
        })
    }
}

/// Read-only, ordered collection of tradable lots.
/// Backed by a static table today, but callers may not assume staticness -
/// the contract is `list` (ordered, re-enumerable) and `get` only.
pub struct ListingCatalog {
    listings: &'static [Listing],
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self {
            listings: MARKET_DATA,
        }
    }

    /// Insertion order preserved so the grid renders deterministically
    /// across re-renders.
    pub fn list(&self) -> &'static [Listing] {
        self.listings
    }

    pub fn get(&self, id: u32) -> Option<&'static Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = ListingCatalog::new();
        let listings = catalog.list();
        for (i, a) in listings.iter().enumerate() {
            for b in &listings[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate listing id {}", a.id);
            }
        }
    }

    #[test]
    fn enumeration_is_stable() {
        let catalog = ListingCatalog::new();
        let first: Vec<u32> = catalog.list().iter().map(|l| l.id).collect();
        let second: Vec<u32> = catalog.list().iter().map(|l| l.id).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn lookup_finds_the_brent_lot() {
        let catalog = ListingCatalog::new();
        let listing = catalog.get(7).expect("listing 7 should exist");
        assert_eq!(listing.location, "Brent Crude");
        assert_eq!(listing.quantity, "3000");
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = ListingCatalog::new();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(9999).is_none());
    }

    #[test]
    fn quantities_all_parse_as_barrels() {
        let catalog = ListingCatalog::new();
        for listing in catalog.list() {
            let barrels = listing
                .quantity_barrels()
                .unwrap_or_else(|e| panic!("{e:#}"));
            assert!(barrels > 0.0);
        }
    }
}
