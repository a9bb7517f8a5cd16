use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for listings. Accepts numeric or string ids on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Ok(Self(value.to_string())),
            RawId::Text(value) => Ok(Self::from(value.as_str())),
        }
    }
}

/// Self-reported attributes of the person searching for a shared home.
///
/// `age` keeps the raw text the user typed; it is only read as a number by the matching engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age: String,
    pub lifestyle: String,
    pub pets: bool,
    pub smoker: bool,
}

impl Profile {
    /// Numeric reading of `age`; anything that does not parse counts as zero.
    pub fn numeric_age(&self) -> f64 {
        self.age
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0)
    }

    /// Returns a copy with exactly one field replaced. Values are stored as given.
    pub fn with_update(&self, update: ProfileUpdate) -> Profile {
        let mut next = self.clone();
        match update {
            ProfileUpdate::Name(value) => next.name = value,
            ProfileUpdate::Age(value) => next.age = value,
            ProfileUpdate::Lifestyle(value) => next.lifestyle = value,
            ProfileUpdate::Pets(value) => next.pets = value,
            ProfileUpdate::Smoker(value) => next.smoker = value,
        }
        next
    }
}

/// Single-field edit dispatched by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    Name(String),
    Age(String),
    Lifestyle(String),
    Pets(bool),
    Smoker(bool),
}

impl ProfileUpdate {
    /// Builds an update from a textual field name and value, as typed in a line-based renderer.
    pub fn parse(field: &str, value: &str) -> Result<Self, ProfileFieldError> {
        match field.trim().to_lowercase().as_str() {
            "name" | "nom" => Ok(Self::Name(value.to_string())),
            "age" | "âge" => Ok(Self::Age(value.to_string())),
            "lifestyle" | "style" => Ok(Self::Lifestyle(value.to_string())),
            "pets" | "animaux" => parse_flag("pets", value).map(Self::Pets),
            "smoker" | "fumeur" => parse_flag("smoker", value).map(Self::Smoker),
            other => Err(ProfileFieldError::UnknownField(other.to_string())),
        }
    }

    pub const fn field_name(&self) -> &'static str {
        match self {
            ProfileUpdate::Name(_) => "name",
            ProfileUpdate::Age(_) => "age",
            ProfileUpdate::Lifestyle(_) => "lifestyle",
            ProfileUpdate::Pets(_) => "pets",
            ProfileUpdate::Smoker(_) => "smoker",
        }
    }
}

/// Lenient boolean reading shared by profile edits and listing imports.
pub(crate) fn read_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "oui" | "1" | "y" | "o" => Some(true),
        "false" | "no" | "non" | "0" | "n" | "" => Some(false),
        _ => None,
    }
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ProfileFieldError> {
    read_flag(value).ok_or_else(|| ProfileFieldError::InvalidFlag {
        field,
        value: value.to_string(),
    })
}

/// Rejection raised when a textual profile edit cannot be mapped to a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileFieldError {
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
    #[error("'{value}' is not a yes/no value for {field}")]
    InvalidFlag { field: &'static str, value: String },
}

/// Current occupant of a shared home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoTenant {
    pub name: String,
    pub age: u32,
}

/// Shared-housing opportunity supplied by the listing catalog. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, rename = "colocataires")]
    pub co_tenants: Vec<CoTenant>,
    #[serde(default, rename = "localisation")]
    pub location: String,
    #[serde(default)]
    pub no_pets: bool,
    #[serde(default)]
    pub no_smoking: bool,
}

impl Listing {
    /// Arithmetic mean of the current co-tenants' ages, if there are any.
    pub fn mean_co_tenant_age(&self) -> Option<f64> {
        if self.co_tenants.is_empty() {
            return None;
        }

        let total: f64 = self.co_tenants.iter().map(|tenant| tenant.age as f64).sum();
        Some(total / self.co_tenants.len() as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Other,
}

/// Entry of the local message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: Sender,
    pub text: String,
}
