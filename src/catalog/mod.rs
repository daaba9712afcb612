mod loader;

pub use loader::{default_search_paths, load_catalog, parse_catalog, resolve_catalog_path};

use crate::models::FoodCatalogItem;

/// The immutable food catalog.
///
/// Loaded once at startup and only ever read afterwards, so it can be shared
/// by reference (or behind an `Arc`) across any number of planning calls.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodCatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodCatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodCatalogItem] {
        &self.items
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&FoodCatalogItem> {
        let name = name.to_lowercase();
        self.items.iter().find(|item| item.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
