//! JSON file-backed catalog

use parking_lot::RwLock;
use shared::models::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{CatalogProvider, CatalogResult, validate_catalog};

/// Read and validate a catalog JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Catalog loaded from a JSON file, reloadable between sessions
#[derive(Debug)]
pub struct FileCatalog {
    path: PathBuf,
    current: RwLock<Arc<Catalog>>,
}

impl FileCatalog {
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let catalog = load_catalog(&path)?;
        tracing::info!(
            path = %path.display(),
            sides = catalog.sides.len(),
            hidden = catalog.hidden.len(),
            "Catalog loaded"
        );
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(catalog)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file. On error the previous catalog stays in place.
    pub fn reload(&self) -> CatalogResult<()> {
        match load_catalog(&self.path) {
            Ok(catalog) => {
                *self.current.write() = Arc::new(catalog);
                tracing::info!(path = %self.path.display(), "Catalog reloaded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Catalog reload failed, keeping previous");
                Err(e)
            }
        }
    }
}

impl CatalogProvider for FileCatalog {
    fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use shared::models::{CatalogItem, ItemList};

    fn write_catalog(dir: &tempfile::TempDir, catalog: &Catalog) -> PathBuf {
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string_pretty(catalog).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_open_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, &Catalog::house_menu());

        let provider = FileCatalog::open(&path).unwrap();
        assert_eq!(*provider.snapshot(), Catalog::house_menu());

        let mut next = Catalog::house_menu();
        next.sides.push(CatalogItem::new("s5", "皮蛋豆腐", 40).sold_out());
        write_catalog(&dir, &next);

        provider.reload().unwrap();
        let item = provider.snapshot().item(ItemList::Sides, "s5").cloned().unwrap();
        assert!(!item.available);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCatalog::open(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_reload_failure_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, &Catalog::house_menu());
        let provider = FileCatalog::open(&path).unwrap();

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(provider.reload(), Err(CatalogError::Parse(_))));
        assert_eq!(*provider.snapshot(), Catalog::house_menu());
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = Catalog::house_menu();
        catalog.hidden.push(CatalogItem::new("h1", "重複", 1));
        let path = write_catalog(&dir, &catalog);

        assert!(matches!(
            load_catalog(&path),
            Err(CatalogError::DuplicateId { list: "hidden", .. })
        ));
    }
}
