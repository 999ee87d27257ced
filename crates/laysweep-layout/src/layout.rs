use crate::LayoutError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the catalog manifest inside the layout root.
pub const CATALOG_FILE_NAME: &str = "Catalog.json";

/// Path manager for one installation layout: a root directory holding one
/// subdirectory per installed package plus the catalog manifest.
#[derive(Debug, Clone)]
pub struct LayoutRoot {
    root: PathBuf,
}

impl LayoutRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn catalog_file(&self) -> PathBuf {
        self.root.join(CATALOG_FILE_NAME)
    }

    #[inline]
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read the catalog manifest as UTF-8 text.
    pub fn read_catalog_text(&self) -> Result<String, LayoutError> {
        if !self.root.is_dir() {
            return Err(LayoutError::RootNotFound(self.root.clone()));
        }
        let path = self.catalog_file();
        if !path.is_file() {
            return Err(LayoutError::CatalogNotFound(path));
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Names of the layout root's direct child directories, sorted.
    ///
    /// Files (the catalog manifest among them) are not package candidates and
    /// are skipped. The sort only makes traversal deterministic for logs and
    /// reports; downstream set membership does not depend on it.
    pub fn package_dir_names(&self) -> Result<Vec<String>, LayoutError> {
        if !self.root.is_dir() {
            return Err(LayoutError::RootNotFound(self.root.clone()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                // a non-UTF-8 name can never match the package grammar
                Err(raw) => debug!("skipping non-UTF-8 directory name {raw:?}"),
            }
        }
        names.sort();

        debug!(
            "found {} directories under {}",
            names.len(),
            self.root.display()
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_resolved_under_the_root() {
        let layout = LayoutRoot::new("/opt/vs-layout");
        assert_eq!(
            layout.catalog_file(),
            PathBuf::from("/opt/vs-layout/Catalog.json")
        );
        assert_eq!(
            layout.package_dir("pkga,version=1.0"),
            PathBuf::from("/opt/vs-layout/pkga,version=1.0")
        );
    }

    #[test]
    fn read_catalog_text_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CATALOG_FILE_NAME), r#"{"packages": []}"#).unwrap();

        let layout = LayoutRoot::new(dir.path());
        assert_eq!(layout.read_catalog_text().unwrap(), r#"{"packages": []}"#);
    }

    #[test]
    fn missing_root_is_root_not_found() {
        let layout = LayoutRoot::new("/nonexistent/layout/root");
        assert!(matches!(
            layout.read_catalog_text(),
            Err(LayoutError::RootNotFound(_))
        ));
        assert!(matches!(
            layout.package_dir_names(),
            Err(LayoutError::RootNotFound(_))
        ));
    }

    #[test]
    fn missing_catalog_is_catalog_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let layout = LayoutRoot::new(dir.path());
        match layout.read_catalog_text() {
            Err(LayoutError::CatalogNotFound(path)) => {
                assert!(path.ends_with(CATALOG_FILE_NAME));
            }
            other => panic!("expected CatalogNotFound, got {other:?}"),
        }
    }

    #[test]
    fn package_dir_names_lists_sorted_directories_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkgb,version=2.0")).unwrap();
        fs::create_dir(dir.path().join("pkga,version=1.0")).unwrap();
        fs::create_dir(dir.path().join("not-a-package")).unwrap();
        fs::write(dir.path().join(CATALOG_FILE_NAME), "{}").unwrap();
        fs::write(dir.path().join("stray-file.txt"), "x").unwrap();

        let layout = LayoutRoot::new(dir.path());
        let names = layout.package_dir_names().unwrap();
        assert_eq!(
            names,
            vec!["not-a-package", "pkga,version=1.0", "pkgb,version=2.0"]
        );
    }

    #[test]
    fn package_dir_names_empty_layout() {
        let dir = tempfile::tempdir().unwrap();
        let layout = LayoutRoot::new(dir.path());
        assert!(layout.package_dir_names().unwrap().is_empty());
    }
}
