use crate::layout::LayoutRoot;
use serde::Serialize;
use std::fs;
use tracing::{debug, info, warn};

/// Outcome of one removal pass over a list of package directories.
#[derive(Debug, Default, Serialize)]
pub struct RemovalReport {
    /// Directories removed (or, on a dry run, that would have been removed).
    pub removed: Vec<String>,
    /// Directories already absent at delete time. Removal is idempotent, so
    /// these are not failures.
    pub missing: Vec<String>,
    /// Directories whose deletion failed, with the underlying error message.
    pub failed: Vec<RemovalFailure>,
}

#[derive(Debug, Serialize)]
pub struct RemovalFailure {
    pub directory: String,
    pub error: String,
}

impl RemovalReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Recursively deletes package directories from a layout.
pub struct PackageRemover {
    layout: LayoutRoot,
}

impl PackageRemover {
    pub fn new(layout: LayoutRoot) -> Self {
        Self { layout }
    }

    /// Remove the named directories one at a time, in input order.
    ///
    /// A failed deletion is recorded and does not block the remaining
    /// directories. With `dry_run` nothing on disk is touched; the report
    /// lists what a real pass would have removed.
    pub fn remove<I, S>(&self, names: I, dry_run: bool) -> RemovalReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = RemovalReport::default();

        for name in names {
            let name = name.as_ref();
            let path = self.layout.package_dir(name);

            if !path.is_dir() {
                debug!("{name} is already absent");
                report.missing.push(name.to_owned());
                continue;
            }

            if dry_run {
                report.removed.push(name.to_owned());
                continue;
            }

            match fs::remove_dir_all(&path) {
                Ok(()) => {
                    info!("removed {name}");
                    report.removed.push(name.to_owned());
                }
                Err(e) => {
                    warn!("failed to remove {name}: {e}");
                    report.failed.push(RemovalFailure {
                        directory: name.to_owned(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }
}
