pub mod catalog;
pub mod contract;
pub mod domain;
pub mod matching;
pub mod session;

pub use catalog::{DuplicateListingId, ListingCatalog, StaticCatalog};
pub use domain::{
    CoTenant, Listing, ListingId, Message, Profile, ProfileFieldError, ProfileUpdate, Sender,
};
pub use matching::{
    score, score_listings, CompatibilityFactor, CompatibilityReport, ScoreComponent,
    ScoredListing, LIFESTYLE_KEYWORDS,
};
pub use session::{
    IgnoreReason, Session, SessionService, SessionSnapshot, Step, Transition, Trigger,
};
