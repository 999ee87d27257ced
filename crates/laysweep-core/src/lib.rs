//! Reconciliation engine for laysweep.
//!
//! This crate ties catalog parsing and layout scanning together into the
//! `Engine` and hosts the pure reconciliation logic: the set difference
//! between locally present package identities and the catalog's declared
//! set, ordered by the composite identity key.

pub mod engine;
pub mod reconcile;

pub use engine::{Engine, ObsoleteReport, RemovalOutcome};
pub use reconcile::{collect_local_packages, find_obsolete};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("catalog error: {0}")]
    Catalog(#[from] laysweep_schema::CatalogError),
    #[error("layout error: {0}")]
    Layout(#[from] laysweep_layout::LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_keeps_the_catalog_message() {
        let inner = laysweep_schema::parse_catalog("{oops").unwrap_err();
        let e = CoreError::from(inner);
        let msg = e.to_string();
        assert!(msg.starts_with("catalog error:"));
        assert!(msg.contains("failed to decode catalog"));
    }

    #[test]
    fn core_error_keeps_the_layout_message() {
        let inner = laysweep_layout::LayoutError::CatalogNotFound("/x/Catalog.json".into());
        let e = CoreError::from(inner);
        assert!(e.to_string().starts_with("layout error:"));
    }
}
