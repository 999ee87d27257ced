use crate::identity::PackageIdentity;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON text is empty")]
    Empty,
    #[error("failed to decode catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// The layout's installation catalog document.
///
/// Field names are the wire contract. Real catalogs carry many more fields
/// per record than the ones modelled here, so unknown fields are tolerated
/// everywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub product: Option<CatalogProduct>,
    pub packages: Vec<PackageRecord>,
}

/// Product information block, when the catalog declares one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogProduct {
    #[serde(rename = "productDisplayVersion", default)]
    pub display_version: Option<String>,
    #[serde(rename = "productSemanticVersion", default)]
    pub semantic_version: Option<String>,
}

/// One package entry of the catalog's `packages` array. `id` and `version`
/// are required; the qualifiers are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub chip: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl PackageRecord {
    pub fn identity(&self) -> PackageIdentity {
        PackageIdentity::new(
            self.id.clone(),
            self.version.clone(),
            self.chip.clone(),
            self.language.clone(),
        )
    }
}

impl Catalog {
    /// Collapse the catalog's records into an identity set. Duplicate records
    /// (including case variants) fold into one entry.
    pub fn identities(&self) -> HashSet<PackageIdentity> {
        self.packages.iter().map(PackageRecord::identity).collect()
    }
}

/// Decode a catalog document from JSON text.
///
/// Empty input is rejected up front; a decode failure carries the underlying
/// serde_json message unchanged. Neither case is recovered here.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    if json.trim().is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(serde_json::from_str(json)?)
}
