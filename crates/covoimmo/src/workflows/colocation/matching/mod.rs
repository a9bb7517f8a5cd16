mod rules;

pub use rules::LIFESTYLE_KEYWORDS;

use super::domain::{Listing, ListingId, Profile};
use serde::{Deserialize, Serialize};

/// Compatibility between a profile and a listing, clamped to `0..=100`.
pub fn score(profile: &Profile, listing: &Listing) -> u8 {
    let (_, raw_score) = rules::score_listing(profile, listing);
    rules::clamp_score(raw_score)
}

/// Scores every listing, keeping the input order.
pub fn score_listings<'a, I>(profile: &Profile, listings: I) -> Vec<ScoredListing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .map(|listing| ScoredListing {
            score: score(profile, listing),
            listing: listing.clone(),
        })
        .collect()
}

/// Adjustment kinds the matching engine can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityFactor {
    Pets,
    Smoking,
    AgeGap,
    Lifestyle,
}

impl CompatibilityFactor {
    pub const fn label(self) -> &'static str {
        match self {
            CompatibilityFactor::Pets => "pets",
            CompatibilityFactor::Smoking => "smoking",
            CompatibilityFactor::AgeGap => "age gap",
            CompatibilityFactor::Lifestyle => "lifestyle",
        }
    }
}

/// One fired adjustment, kept so a renderer can explain the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: CompatibilityFactor,
    pub points: i16,
    pub notes: String,
}

/// Score with its audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub listing_id: ListingId,
    pub score: u8,
    pub raw_score: i16,
    pub components: Vec<ScoreComponent>,
}

impl CompatibilityReport {
    pub fn evaluate(profile: &Profile, listing: &Listing) -> Self {
        let (components, raw_score) = rules::score_listing(profile, listing);
        Self {
            listing_id: listing.id.clone(),
            score: rules::clamp_score(raw_score),
            raw_score,
            components,
        }
    }
}

/// Search result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: Listing,
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::colocation::domain::CoTenant;

    fn liege_listing() -> Listing {
        Listing {
            id: ListingId::new("1"),
            title: "Maison partagée à Liège".to_string(),
            description: String::new(),
            photos: Vec::new(),
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

    fn profile(age: &str, lifestyle: &str, pets: bool, smoker: bool) -> Profile {
        Profile {
            name: String::new(),
            age: age.to_string(),
            lifestyle: lifestyle.to_string(),
            pets,
            smoker,
        }
    }

    #[test]
    fn calm_profile_is_clamped_to_one_hundred() {
        let ana = Profile {
            name: "Ana".to_string(),
            ..profile("25", "calme", false, false)
        };

        let report = CompatibilityReport::evaluate(&ana, &liege_listing());
        assert_eq!(report.raw_score, 110);
        assert_eq!(report.score, 100);
        assert_eq!(score(&ana, &liege_listing()), 100);
        assert_eq!(report.components.len(), 1);
        assert_eq!(report.components[0].factor, CompatibilityFactor::Lifestyle);
    }

    #[test]
    fn pets_and_smoking_penalties_stack() {
        let candidate = profile("20", "", true, true);

        let report = CompatibilityReport::evaluate(&candidate, &liege_listing());
        assert_eq!(report.score, 50);
        let factors: Vec<_> = report.components.iter().map(|c| c.factor).collect();
        assert_eq!(
            factors,
            vec![CompatibilityFactor::Pets, CompatibilityFactor::Smoking],
            "a gap of exactly ten years is not penalised"
        );
    }

    #[test]
    fn age_gap_penalty_uses_numeric_age() {
        let listing = liege_listing();
        assert_eq!(score(&profile("19", "", false, false), &listing), 90);
        assert_eq!(score(&profile("41", "", false, false), &listing), 90);
        assert_eq!(score(&profile("abc", "", false, false), &listing), 90);
        assert_eq!(score(&profile("40", "", false, false), &listing), 100);
    }

    #[test]
    fn zero_co_tenants_never_trigger_age_gap() {
        let listing = Listing {
            co_tenants: Vec::new(),
            ..liege_listing()
        };

        for age in ["", "0", "99", "-5", "abc"] {
            let report = CompatibilityReport::evaluate(&profile(age, "", false, false), &listing);
            assert_eq!(report.score, 100, "age {age:?}");
            assert!(report.components.is_empty());
        }
    }

    #[test]
    fn lifestyle_bonus_applies_once() {
        let listing = Listing {
            no_pets: false,
            no_smoking: false,
            ..liege_listing()
        };
        let candidate = profile("19", "CALME, Sport et Télétravail, fête", true, true);

        let report = CompatibilityReport::evaluate(&candidate, &listing);
        assert_eq!(report.raw_score, 100);
        let bonuses = report
            .components
            .iter()
            .filter(|c| c.factor == CompatibilityFactor::Lifestyle)
            .count();
        assert_eq!(bonuses, 1);
    }

    #[test]
    fn flags_only_penalise_when_both_sides_match() {
        let listing = Listing {
            no_pets: false,
            no_smoking: false,
            ..liege_listing()
        };
        assert_eq!(score(&profile("30", "", true, true), &listing), 100);

        let strict = liege_listing();
        assert_eq!(score(&profile("30", "", false, false), &strict), 100);
    }

    #[test]
    fn score_stays_in_range_for_every_flag_combination() {
        let ages = ["", "0", "30", "200", "-40", "abc"];
        let lifestyles = ["", "calme", "rien"];
        for no_pets in [false, true] {
            for no_smoking in [false, true] {
                let listing = Listing {
                    no_pets,
                    no_smoking,
                    ..liege_listing()
                };
                for pets in [false, true] {
                    for smoker in [false, true] {
                        for age in ages {
                            for lifestyle in lifestyles {
                                let candidate = profile(age, lifestyle, pets, smoker);
                                let first = score(&candidate, &listing);
                                assert!(first <= 100);
                                assert_eq!(first, score(&candidate, &listing));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn score_listings_keeps_input_order() {
        let first = Listing {
            id: ListingId::new("a"),
            no_pets: false,
            ..liege_listing()
        };
        let second = Listing {
            id: ListingId::new("b"),
            ..liege_listing()
        };
        let listings = vec![second.clone(), first.clone()];

        let results = score_listings(&profile("30", "", true, false), &listings);
        let ids: Vec<_> = results.iter().map(|row| row.listing.id.clone()).collect();
        assert_eq!(ids, vec![ListingId::new("b"), ListingId::new("a")]);
        assert_eq!(results[0].score, 70);
        assert_eq!(results[1].score, 100);
    }
}
