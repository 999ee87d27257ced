//! Filesystem collaborator for laysweep.
//!
//! This crate owns every blocking operation the core is not allowed to do
//! itself: resolving paths inside an installation layout (`LayoutRoot`),
//! reading the catalog file, enumerating the layout's direct child
//! directories, and recursively removing obsolete package directories
//! (`PackageRemover`).

pub mod layout;
pub mod remover;

pub use layout::{LayoutRoot, CATALOG_FILE_NAME};
pub use remover::{PackageRemover, RemovalFailure, RemovalReport};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout root is not a directory: {0}")]
    RootNotFound(PathBuf),
    #[error("catalog not found: {0}")]
    CatalogNotFound(PathBuf),
    #[error("layout I/O error: {0}")]
    Io(#[from] std::io::Error),
}
