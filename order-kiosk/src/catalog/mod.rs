//! Catalog Provider - read-only menu definitions for sessions
//!
//! Sessions take an `Arc<Catalog>` snapshot when they start (and again on
//! reset), so a catalog reloaded between sessions shows up on the next one
//! without disturbing an order in progress.

mod file;

pub use file::{FileCatalog, load_catalog};

use parking_lot::RwLock;
use shared::models::{Catalog, CatalogItem, ComboOption};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate id in {list}: {id}")]
    DuplicateId { list: &'static str, id: String },

    #[error("Empty name in {list}: {id}")]
    EmptyName { list: &'static str, id: String },

    #[error("Empty id in {list}")]
    EmptyId { list: &'static str },

    #[error("Option set is empty: {0}")]
    EmptyOptionSet(&'static str),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Source of catalog snapshots
pub trait CatalogProvider: Send + Sync {
    fn snapshot(&self) -> Arc<Catalog>;
}

/// Fixed in-memory catalog
#[derive(Debug)]
pub struct StaticCatalog {
    catalog: RwLock<Arc<Catalog>>,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> CatalogResult<Self> {
        validate_catalog(&catalog)?;
        Ok(Self {
            catalog: RwLock::new(Arc::new(catalog)),
        })
    }

    /// 内置菜单
    pub fn house_menu() -> Self {
        Self {
            catalog: RwLock::new(Arc::new(Catalog::house_menu())),
        }
    }

    /// Swap in a new catalog; running sessions keep their snapshot
    pub fn replace(&self, catalog: Catalog) -> CatalogResult<()> {
        validate_catalog(&catalog)?;
        *self.catalog.write() = Arc::new(catalog);
        tracing::info!("Catalog replaced");
        Ok(())
    }
}

impl CatalogProvider for StaticCatalog {
    fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.read().clone()
    }
}

/// Check ids are unique and non-empty and names are filled in.
pub fn validate_catalog(catalog: &Catalog) -> CatalogResult<()> {
    if catalog.combo_bases.is_empty() {
        return Err(CatalogError::EmptyOptionSet("combo_bases"));
    }
    if catalog.combo_modifiers.is_empty() {
        return Err(CatalogError::EmptyOptionSet("combo_modifiers"));
    }
    validate_options("combo_bases", &catalog.combo_bases)?;
    validate_options("combo_modifiers", &catalog.combo_modifiers)?;
    validate_items("sides", &catalog.sides)?;
    validate_items("hidden", &catalog.hidden)?;
    Ok(())
}

fn validate_options(list: &'static str, options: &[ComboOption]) -> CatalogResult<()> {
    validate_entries(list, options.iter().map(|o| (o.id.as_str(), o.name.as_str())))
}

fn validate_items(list: &'static str, items: &[CatalogItem]) -> CatalogResult<()> {
    validate_entries(list, items.iter().map(|i| (i.id.as_str(), i.name.as_str())))
}

fn validate_entries<'a>(
    list: &'static str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for (id, name) in entries {
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId { list });
        }
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName {
                list,
                id: id.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
