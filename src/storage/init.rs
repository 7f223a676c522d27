//! First-run detection and starter data

use crate::models::{Category, DefaultCategory};

use super::kv::KeyValueStore;
use super::CATEGORIES_KEY;

/// Starter categories, in display order
pub fn default_categories() -> Vec<Category> {
    DefaultCategory::all()
        .iter()
        .map(DefaultCategory::to_category)
        .collect()
}

/// Check if the store has never had categories saved
///
/// An explicitly emptied category list does not count as uninitialized.
pub fn needs_initialization<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.load(CATEGORIES_KEY).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{save_categories, JsonFileStore};
    use tempfile::TempDir;

    #[test]
    fn test_default_categories() {
        let categories = default_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].name, "Non-Negotiables");
        assert!(categories.iter().all(|c| c.expenses.is_empty()));
    }

    #[test]
    fn test_needs_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data"));
        assert!(needs_initialization(&store));

        save_categories(&store, &[]).unwrap();
        assert!(!needs_initialization(&store));
    }
}
