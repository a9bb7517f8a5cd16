use std::sync::Arc;

use crate::workflows::colocation::catalog::StaticCatalog;
use crate::workflows::colocation::domain::{CoTenant, Listing, ListingId, ProfileUpdate};
use crate::workflows::colocation::session::{SessionService, Step, Trigger};

pub(super) fn liege() -> Listing {
    Listing {
        id: ListingId::new("1"),
        title: "Maison partagée à Liège".to_string(),
        description: "3 chambres, jardin".to_string(),
        photos: vec!["/logo.png".to_string()],
        co_tenants: vec![
            CoTenant {
                name: "Sophie".to_string(),
                age: 28,
            },
            CoTenant {
                name: "Marc".to_string(),
                age: 32,
            },
        ],
        location: "Liège centre".to_string(),
        no_pets: true,
        no_smoking: true,
    }
}

pub(super) fn namur() -> Listing {
    Listing {
        id: ListingId::new("2"),
        title: "Appartement à Namur".to_string(),
        description: String::new(),
        photos: Vec::new(),
        co_tenants: Vec::new(),
        location: "Namur".to_string(),
        no_pets: false,
        no_smoking: false,
    }
}

pub(super) fn service() -> SessionService<StaticCatalog> {
    let catalog = StaticCatalog::new(vec![liege(), namur()]).expect("unique ids");
    SessionService::new(Arc::new(catalog))
}

pub(super) fn select(id: &str) -> Trigger {
    Trigger::SelectListing {
        listing_id: ListingId::new(id),
    }
}

pub(super) fn fill_ana(service: &mut SessionService<StaticCatalog>) {
    service.set_profile_field(ProfileUpdate::Name("Ana".to_string()));
    service.set_profile_field(ProfileUpdate::Age("25".to_string()));
    service.set_profile_field(ProfileUpdate::Lifestyle("calme".to_string()));
}

/// Walks home -> profile -> results -> details for the given listing.
pub(super) fn service_on_details(id: &str) -> SessionService<StaticCatalog> {
    let mut service = service();
    service.navigate(Trigger::Continue);
    service.navigate(Trigger::Search);
    let transition = service.navigate(select(id));
    assert!(transition.is_moved(), "listing {id} should be selectable");
    assert_eq!(service.session().step(), Step::Details);
    service
}
