use std::collections::HashSet;

use super::domain::{Listing, ListingId};

/// Read-only listing source injected into the session. The session only keeps ids.
pub trait ListingCatalog: Send + Sync {
    fn listings(&self) -> &[Listing];

    fn find(&self, id: &ListingId) -> Option<&Listing> {
        self.listings().iter().find(|listing| &listing.id == id)
    }

    fn contains(&self, id: &ListingId) -> bool {
        self.find(id).is_some()
    }
}

/// In-memory catalog preserving the order listings were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    listings: Vec<Listing>,
}

impl StaticCatalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, DuplicateListingId> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(&listing.id) {
                return Err(DuplicateListingId(listing.id.clone()));
            }
        }

        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingCatalog for StaticCatalog {
    fn listings(&self) -> &[Listing] {
        &self.listings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("listing id '{0}' appears more than once")]
pub struct DuplicateListingId(pub ListingId);
