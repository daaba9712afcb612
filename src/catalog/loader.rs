use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{DietError, Result};
use crate::models::FoodCatalogItem;

/// On-disk catalog document: `{"foods": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    foods: Vec<FoodCatalogItem>,
}

/// Candidate locations tried when no explicit catalog path is given.
pub fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("foods.json"),
        PathBuf::from("data").join("foods.json"),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("foods.json"),
    ]
}

/// Pick the catalog file: the explicit path if given, else the first
/// existing default location.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => default_search_paths(),
    };

    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| {
            let tried: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
            DietError::CatalogNotFound(tried.join(", "))
        })
}

/// Parse a catalog document.
///
/// Duplicate ids keep the last occurrence at the position of the first;
/// rows with invalid nutrient data are dropped.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(content)?;

    let mut items: Vec<FoodCatalogItem> = Vec::with_capacity(file.foods.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for item in file.foods {
        if !item.is_valid() {
            warn!(id = %item.id, name = %item.name, "skipping invalid catalog item");
            skipped += 1;
            continue;
        }
        match index.get(&item.id) {
            Some(&pos) => items[pos] = item,
            None => {
                index.insert(item.id.clone(), items.len());
                items.push(item);
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "some catalog items were invalid");
    }
    Ok(Catalog::new(items))
}

/// Resolve and load the catalog.
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    let path = resolve_catalog_path(explicit)?;
    let content = fs::read_to_string(&path)?;
    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), items = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{"foods": [
        {"id": "apple", "name": "Apple", "per_100g": {"calories": 52, "protein": 0.3, "fat": 0.2, "carbs": 13.8},
         "tags": ["veg", "vegan"], "cost_level": "low"},
        {"id": "salmon", "name": "Salmon", "per_100g": {"calories": 208, "protein": 25.4, "fat": 12.4, "carbs": 0},
         "tags": ["non_veg"], "cost_level": "high"},
        {"id": "apple", "name": "Honeycrisp Apple", "per_100g": {"calories": 52, "protein": 0.3, "fat": 0.2, "carbs": 13.8},
         "tags": ["veg", "vegan"], "cost_level": "medium"},
        {"id": "broken", "name": "Broken", "per_100g": {"calories": -5, "protein": 0, "fat": 0, "carbs": 0},
         "tags": [], "cost_level": "low"}
    ]}"#;

    #[test]
    fn test_parse_dedups_and_skips_invalid() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        // Last occurrence wins but keeps the first position.
        assert_eq!(catalog.items()[0].name, "Honeycrisp Apple");
        assert_eq!(catalog.items()[1].id, "salmon");
        assert!(catalog.items().iter().all(|item| item.id != "broken"));
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(matches!(parse_catalog("{not json"), Err(DietError::Json(_))));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_explicit_path() {
        let result = load_catalog(Some(Path::new("/definitely/not/here/foods.json")));
        assert!(matches!(result, Err(DietError::CatalogNotFound(_))));
    }

    #[test]
    fn test_default_paths_include_bundled_catalog() {
        let paths = default_search_paths();
        assert!(paths.last().unwrap().ends_with("data/foods.json"));
    }
}
