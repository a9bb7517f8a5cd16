use super::super::domain::{Listing, Profile};
use super::{CompatibilityFactor, ScoreComponent};

pub(crate) const BASE_SCORE: i16 = 100;
pub(crate) const PETS_PENALTY: i16 = -30;
pub(crate) const SMOKING_PENALTY: i16 = -20;
pub(crate) const AGE_GAP_PENALTY: i16 = -10;
pub(crate) const LIFESTYLE_BONUS: i16 = 10;
pub(crate) const MAX_AGE_GAP: f64 = 10.0;

/// Lifestyle keywords that earn the bonus. Compared against the lower-cased lifestyle text.
pub const LIFESTYLE_KEYWORDS: [&str; 4] = ["calme", "fête", "sport", "télétravail"];

/// Applies every adjustment to the base score and returns the fired components with the
/// unclamped total.
pub(crate) fn score_listing(profile: &Profile, listing: &Listing) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total_score = BASE_SCORE;

    if profile.pets && listing.no_pets {
        components.push(ScoreComponent {
            factor: CompatibilityFactor::Pets,
            points: PETS_PENALTY,
            notes: "pets declared but the listing excludes animals".to_string(),
        });
        total_score += PETS_PENALTY;
    }

    if profile.smoker && listing.no_smoking {
        components.push(ScoreComponent {
            factor: CompatibilityFactor::Smoking,
            points: SMOKING_PENALTY,
            notes: "smoker but the listing is non-smoking".to_string(),
        });
        total_score += SMOKING_PENALTY;
    }

    if let Some(mean_age) = listing.mean_co_tenant_age() {
        let age = profile.numeric_age();
        let gap = (mean_age - age).abs();
        if gap > MAX_AGE_GAP {
            components.push(ScoreComponent {
                factor: CompatibilityFactor::AgeGap,
                points: AGE_GAP_PENALTY,
                notes: format!(
                    "age {age} is {gap:.1} years from the co-tenant average {mean_age:.1}"
                ),
            });
            total_score += AGE_GAP_PENALTY;
        }
    }

    if let Some(keyword) = matched_keyword(&profile.lifestyle) {
        components.push(ScoreComponent {
            factor: CompatibilityFactor::Lifestyle,
            points: LIFESTYLE_BONUS,
            notes: format!("lifestyle mentions '{keyword}'"),
        });
        total_score += LIFESTYLE_BONUS;
    }

    (components, total_score)
}

fn matched_keyword(lifestyle: &str) -> Option<&'static str> {
    let lowered = lifestyle.to_lowercase();
    LIFESTYLE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

pub(crate) fn clamp_score(raw: i16) -> u8 {
    raw.clamp(0, 100) as u8
}
