//! Co-tenancy contract templating.
//!
//! Downstream consumers parse this document by shape, so the wording, spacing and placeholder
//! brackets below must stay byte-identical.

use super::domain::{Listing, Profile};

pub const NAME_PLACEHOLDER: &str = "[Nom]";
pub const AGE_PLACEHOLDER: &str = "[Âge]";
pub const LOCATION_PLACEHOLDER: &str = "[Localisation]";
pub const CO_TENANT_PLACEHOLDER: &str = "[Nom du colocataire]";

/// Renders the simplified co-tenancy contract for the profile and the selected listing.
///
/// The second cohabitant is never filled in.
pub fn generate(profile: &Profile, listing: Option<&Listing>) -> String {
    let name = or_placeholder(&profile.name, NAME_PLACEHOLDER);
    let age = or_placeholder(&profile.age, AGE_PLACEHOLDER);
    let location = listing
        .map(|listing| listing.location.as_str())
        .map_or(LOCATION_PLACEHOLDER, |location| {
            or_placeholder(location, LOCATION_PLACEHOLDER)
        });

    format!(
        "Contrat simplifié de co-location\n\
         \n\
         Entre les soussignés :\n\
         - {name}, âgé(e) de {age} ans, ci-après désigné(e) comme \"Cohabitant 1\"\n\
         - {CO_TENANT_PLACEHOLDER}, ci-après désigné(e) comme \"Cohabitant 2\"\n\
         \n\
         Objet : Co-location du logement situé à {location} \n\
         \n\
         Conditions :\n\
         - Loyer mensuel : 500€ / personne\n\
         - Partage des charges : équitable\n\
         - Durée : 1 an renouvelable\n\
         - Règlement intérieur : respect, propreté, communication\n\
         \n\
         Fait à Liège, le [date]\n\
         \n\
         Signatures :\n\
         ________________________     ________________________\n\
         Cohabitant 1                  Cohabitant 2"
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
