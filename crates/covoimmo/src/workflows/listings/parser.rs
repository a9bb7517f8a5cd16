use crate::workflows::colocation::domain::{read_flag, CoTenant, Listing, ListingId};
use serde::Deserialize;
use std::io::Read;

use super::ListingImportError;

const LIST_SEPARATOR: char = '|';

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Listing>, ListingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
        let row = record?;
        listings.push(row.into_listing(index + 1)?);
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    photos: String,
    #[serde(default)]
    colocataires: String,
    #[serde(default)]
    localisation: String,
    #[serde(rename = "noPets", default)]
    no_pets: String,
    #[serde(rename = "noSmoking", default)]
    no_smoking: String,
}

impl ListingRow {
    fn into_listing(self, row: usize) -> Result<Listing, ListingImportError> {
        let co_tenants = split_list(&self.colocataires)
            .map(|entry| parse_co_tenant(entry, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Listing {
            id: ListingId::from(self.id.as_str()),
            title: self.title,
            description: self.description,
            photos: split_list(&self.photos).map(str::to_string).collect(),
            co_tenants,
            location: self.localisation,
            no_pets: parse_flag(&self.no_pets, "noPets", row)?,
            no_smoking: parse_flag(&self.no_smoking, "noSmoking", row)?,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Co-tenants are written `Name:age`.
fn parse_co_tenant(entry: &str, row: usize) -> Result<CoTenant, ListingImportError> {
    let invalid = || ListingImportError::InvalidCoTenant {
        row,
        entry: entry.to_string(),
    };

    let (name, age) = entry.rsplit_once(':').ok_or_else(invalid)?;
    let age = age.trim().parse::<u32>().map_err(|_| invalid())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    Ok(CoTenant {
        name: name.to_string(),
        age,
    })
}

fn parse_flag(raw: &str, column: &'static str, row: usize) -> Result<bool, ListingImportError> {
    read_flag(raw).ok_or_else(|| ListingImportError::InvalidFlag {
        row,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_co_tenant_reads_name_and_age() {
        let tenant = parse_co_tenant("Sophie : 28", 1).expect("valid entry");
        assert_eq!(tenant.name, "Sophie");
        assert_eq!(tenant.age, 28);
    }

    #[test]
    fn parse_co_tenant_rejects_missing_age() {
        match parse_co_tenant("Marc", 3) {
            Err(ListingImportError::InvalidCoTenant { row: 3, entry }) => assert_eq!(entry, "Marc"),
            other => panic!("expected invalid co-tenant, got {other:?}"),
        }
        assert!(parse_co_tenant(":30", 1).is_err());
        assert!(parse_co_tenant("Marc:trente", 1).is_err());
    }

    #[test]
    fn split_list_drops_blank_entries() {
        let entries: Vec<_> = split_list(" a.png || b.png |").collect();
        assert_eq!(entries, vec!["a.png", "b.png"]);
    }
}
