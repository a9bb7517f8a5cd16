//! Listing import from JSON or CSV exports into an in-memory catalog.

mod parser;

use crate::workflows::colocation::catalog::{DuplicateListingId, StaticCatalog};
use crate::workflows::colocation::domain::{CoTenant, Listing, ListingId};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidCoTenant {
        row: usize,
        entry: String,
    },
    InvalidFlag {
        row: usize,
        column: &'static str,
        value: String,
    },
    Duplicate(DuplicateListingId),
    UnsupportedFormat(PathBuf),
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listings: {}", err),
            ListingImportError::Json(err) => write!(f, "invalid listing JSON: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::InvalidCoTenant { row, entry } => write!(
                f,
                "row {}: co-tenant '{}' must be written Name:age",
                row, entry
            ),
            ListingImportError::InvalidFlag { row, column, value } => {
                write!(f, "row {}: '{}' is not a valid {} flag", row, value, column)
            }
            ListingImportError::Duplicate(err) => write!(f, "{}", err),
            ListingImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported listings file '{}': expected .json or .csv",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Json(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::Duplicate(err) => Some(err),
            ListingImportError::InvalidCoTenant { .. }
            | ListingImportError::InvalidFlag { .. }
            | ListingImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ListingImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<DuplicateListingId> for ListingImportError {
    fn from(err: DuplicateListingId) -> Self {
        Self::Duplicate(err)
    }
}

pub struct ListingImporter;

impl ListingImporter {
    /// Loads a catalog, picking the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<StaticCatalog, ListingImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_reader(std::fs::File::open(path)?)?,
            Some("csv") => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(ListingImportError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(path = %path.display(), listings = catalog.len(), "listing catalog loaded");
        Ok(catalog)
    }

    /// Expects a JSON array of listing records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<StaticCatalog, ListingImportError> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Ok(StaticCatalog::new(listings)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<StaticCatalog, ListingImportError> {
        let listings = parser::parse_csv(reader)?;
        Ok(StaticCatalog::new(listings)?)
    }
}

/// The single listing bundled with the application, used when no export is configured.
pub fn sample_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![Listing {
        id: ListingId::new("1"),
        title: "Maison partagée à Liège".to_string(),
        description: "3 chambres, jardin, proche des transports. Co-location à partir de 500€/mois."
            .to_string(),
        photos: vec!["/logo.png".to_string(), "/logo.png".to_string()],
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
    }])
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::colocation::catalog::ListingCatalog;
    use std::io::Cursor;

    #[test]
    fn csv_reader_builds_catalog_in_file_order() {
        let csv = "id,title,description,photos,colocataires,localisation,noPets,noSmoking\n\
                   7,Studio partagé,Calme,a.png|b.png,Léa:24|Tom:26,Namur,oui,non\n\
                   3,Loft,,,,Liège,false,true\n";

        let catalog = ListingImporter::from_csv_reader(Cursor::new(csv)).expect("csv imports");
        let listings = catalog.listings();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, ListingId::new("7"));
        assert_eq!(listings[0].photos, vec!["a.png", "b.png"]);
        assert_eq!(listings[0].co_tenants[1].name, "Tom");
        assert!(listings[0].no_pets);
        assert!(!listings[0].no_smoking);
        assert!(listings[1].co_tenants.is_empty());
        assert!(listings[1].no_smoking);
    }

    #[test]
    fn csv_reader_reports_bad_flags() {
        let csv = "id,title,noPets\n1,Maison,peut-être\n";
        match ListingImporter::from_csv_reader(Cursor::new(csv)) {
            Err(ListingImportError::InvalidFlag { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "noPets");
            }
            other => panic!("expected invalid flag, got {other:?}"),
        }
    }

    #[test]
    fn json_reader_rejects_duplicate_ids() {
        let json = r#"[{"id": 1, "title": "A"}, {"id": "1", "title": "B"}]"#;
        match ListingImporter::from_json_reader(Cursor::new(json)) {
            Err(ListingImportError::Duplicate(DuplicateListingId(id))) => {
                assert_eq!(id, ListingId::new("1"))
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        let err = ListingImporter::from_path("listings.xml").expect_err("unsupported");
        assert!(matches!(err, ListingImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn sample_catalog_holds_the_liege_house() {
        let catalog = sample_catalog();
        let listing = catalog
            .find(&ListingId::new("1"))
            .expect("sample listing present");
        assert_eq!(listing.location, "Liège centre");
        assert_eq!(listing.mean_co_tenant_age(), Some(30.0));
    }
}
