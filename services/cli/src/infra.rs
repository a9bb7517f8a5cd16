use clap::Args;
use covoimmo::config::CatalogConfig;
use covoimmo::workflows::colocation::{ProfileUpdate, StaticCatalog};
use covoimmo::workflows::listings::{sample_catalog, ListingImportError, ListingImporter};

/// Profile flags shared by the subcommands. Only the flags given become updates.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ProfileArgs {
    /// Full name written into the contract
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Age, as typed (non-numeric values count as 0 when scoring)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: Option<String>,
    /// Lifestyle description (calme, fête, sport, télétravail...)
    #[arg(long)]
    pub(crate) lifestyle: Option<String>,
    /// I have pets
    #[arg(long)]
    pub(crate) pets: bool,
    /// I smoke
    #[arg(long)]
    pub(crate) smoker: bool,
}

impl ProfileArgs {
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.lifestyle.is_none()
            && !self.pets
            && !self.smoker
    }

    pub(crate) fn updates(&self) -> Vec<ProfileUpdate> {
        let mut updates = Vec::new();
        if let Some(name) = &self.name {
            updates.push(ProfileUpdate::Name(name.clone()));
        }
        if let Some(age) = &self.age {
            updates.push(ProfileUpdate::Age(age.clone()));
        }
        if let Some(lifestyle) = &self.lifestyle {
            updates.push(ProfileUpdate::Lifestyle(lifestyle.clone()));
        }
        if self.pets {
            updates.push(ProfileUpdate::Pets(true));
        }
        if self.smoker {
            updates.push(ProfileUpdate::Smoker(true));
        }
        updates
    }

    /// Profile used by the demo when no flag is given.
    pub(crate) fn demo_profile() -> Self {
        Self {
            name: Some("Ana".to_string()),
            age: Some("25".to_string()),
            lifestyle: Some("calme".to_string()),
            pets: false,
            smoker: false,
        }
    }
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<StaticCatalog, ListingImportError> {
    match &config.listings_path {
        Some(path) => ListingImporter::from_path(path),
        None => Ok(sample_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_only_cover_given_flags() {
        let args = ProfileArgs {
            age: Some("-5".to_string()),
            smoker: true,
            ..ProfileArgs::default()
        };

        assert_eq!(
            args.updates(),
            vec![
                ProfileUpdate::Age("-5".to_string()),
                ProfileUpdate::Smoker(true)
            ]
        );
        assert!(!args.is_empty());
        assert!(ProfileArgs::default().is_empty());
    }

    #[test]
    fn missing_path_falls_back_to_sample() {
        let catalog = load_catalog(&CatalogConfig::default()).expect("sample catalog");
        assert_eq!(catalog.len(), 1);
    }
}
