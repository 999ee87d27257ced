use crate::reconcile::{collect_local_packages, find_obsolete};
use crate::CoreError;
use laysweep_layout::{LayoutRoot, PackageRemover, RemovalReport};
use laysweep_schema::{parse_catalog, parse_directory_name, Catalog, PackageIdentity};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// High-level operations over one installation layout.
///
/// The engine owns the sequencing: read the catalog, enumerate the layout's
/// direct children, reconcile the two identity sets, and hand the ordered
/// obsolete list to the caller or to the remover. All filesystem access goes
/// through [`LayoutRoot`].
pub struct Engine {
    layout: LayoutRoot,
}

/// Result of one reconciliation pass.
#[derive(Debug, Serialize)]
pub struct ObsoleteReport {
    /// Product display version declared by the catalog, when present.
    pub product_version: Option<String>,
    /// Obsolete identities in canonical order.
    pub obsolete: Vec<PackageIdentity>,
}

/// Result of a removal pass: the reconciliation outcome plus what happened
/// to each obsolete directory.
#[derive(Debug, Serialize)]
pub struct RemovalOutcome {
    pub product_version: Option<String>,
    pub obsolete: Vec<PackageIdentity>,
    pub removal: RemovalReport,
}

impl Engine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: LayoutRoot::new(root.into()),
        }
    }

    pub fn layout(&self) -> &LayoutRoot {
        &self.layout
    }

    /// Load and decode the layout's catalog document.
    pub fn load_catalog(&self) -> Result<Catalog, CoreError> {
        let text = self.layout.read_catalog_text()?;
        Ok(parse_catalog(&text)?)
    }

    /// Reconcile the layout against its catalog.
    pub fn list_obsolete(&self) -> Result<ObsoleteReport, CoreError> {
        let (report, _names) = self.reconcile()?;
        Ok(report)
    }

    /// Remove every obsolete package directory, in canonical order.
    ///
    /// Each identity is resolved back to the directory name observed during
    /// the scan: identity comparison folds case, so on a case-sensitive
    /// filesystem the canonical rendering may not name the directory exactly.
    /// Deletion failures do not stop the pass; they are collected in the
    /// outcome's removal report.
    pub fn remove_obsolete(&self, dry_run: bool) -> Result<RemovalOutcome, CoreError> {
        let (report, names) = self.reconcile()?;

        let directories: Vec<String> = report
            .obsolete
            .iter()
            .map(|identity| resolve_directory_name(identity, &names))
            .collect();

        let remover = PackageRemover::new(self.layout.clone());
        let removal = remover.remove(&directories, dry_run);

        Ok(RemovalOutcome {
            product_version: report.product_version,
            obsolete: report.obsolete,
            removal,
        })
    }

    fn reconcile(&self) -> Result<(ObsoleteReport, Vec<String>), CoreError> {
        let catalog = self.load_catalog()?;
        let names = self.layout.package_dir_names()?;

        let catalog_set = catalog.identities();
        let local_set = collect_local_packages(&names);
        debug!(
            "catalog declares {} packages, layout holds {}",
            catalog_set.len(),
            local_set.len()
        );

        let obsolete = find_obsolete(&catalog_set, &local_set);
        info!("{} obsolete packages", obsolete.len());

        let product_version = catalog.product.and_then(|p| p.display_version);
        Ok((
            ObsoleteReport {
                product_version,
                obsolete,
            },
            names,
        ))
    }
}

// An obsolete identity always came from one of the scanned names, so the
// scan is the authoritative spelling; the canonical rendering is only a
// fallback.
fn resolve_directory_name(identity: &PackageIdentity, scanned: &[String]) -> String {
    scanned
        .iter()
        .find(|name| parse_directory_name(name).is_some_and(|parsed| parsed == *identity))
        .cloned()
        .unwrap_or_else(|| identity.to_string())
}
