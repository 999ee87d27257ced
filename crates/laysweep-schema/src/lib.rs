//! Package identity values and catalog document parsing for laysweep.
//!
//! This crate defines the schema layer: the `PackageIdentity` value type with
//! its case-insensitive equality/ordering rules and canonical rendering, the
//! directory-name grammar parser (`parse_directory_name`), and the JSON
//! catalog wire format (`Catalog`).

pub mod catalog;
pub mod identity;

pub use catalog::{parse_catalog, Catalog, CatalogError, CatalogProduct, PackageRecord};
pub use identity::{parse_directory_name, PackageIdentity};
