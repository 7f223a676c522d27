//! Key-value persistence
//!
//! The engine only ever talks to storage through `KeyValueStore`: a flat
//! namespace of string keys mapping to JSON documents. Loading never fails;
//! a missing or corrupted document reads as absent and the caller falls back
//! to its default. Concurrent writers are last-writer-wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_json, write_json_atomic};

/// A flat JSON key-value store
pub trait KeyValueStore {
    /// Load the document stored under `key`, if any
    fn load(&self, key: &str) -> Option<Value>;

    /// Replace the document stored under `key`
    fn save(&self, key: &str, value: &Value) -> BudgetResult<()>;
}

/// Decode a JSON array one element at a time
///
/// Elements that do not decode as `T` are dropped with a warning and the rest
/// are kept. A document that is not an array decodes as empty.
pub fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> Vec<T> {
    let Value::Array(items) = value else {
        tracing::warn!(what, "stored list is not an array, using empty list");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(what, index, error = %e, "dropping unreadable list entry");
                None
            }
        })
        .collect()
}

/// Serialize and save a typed value
pub fn save_value<T, S>(store: &S, key: &str, value: &T) -> BudgetResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_value(value)?;
    store.save(key, &json)
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`; characters outside `[A-Za-z0-9._-]` become `_`
    pub fn key_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Option<Value> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        match read_json::<Value, _>(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupted stored value, ignoring");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &Value) -> BudgetResult<()> {
        let path = self.key_path(key);
        tracing::debug!(key, path = %path.display(), "saving");
        write_json_atomic(&path, value)
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document, bypassing serialization
    pub fn insert_raw(&self, key: &str, value: Value) -> BudgetResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        entries.get(key).cloned()
    }

    fn save(&self, key: &str, value: &Value) -> BudgetResult<()> {
        self.insert_raw(key, value.clone())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Option<Value> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> BudgetResult<()> {
        (**self).save(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("netIncome").is_none());

        store.save("netIncome", &json!(500000)).unwrap();
        assert_eq!(store.load("netIncome"), Some(json!(500000)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_writer_wins() {
        let store = MemoryStore::new();
        store.save("netIncome", &json!(1)).unwrap();
        store.save("netIncome", &json!(2)).unwrap();
        assert_eq!(store.load("netIncome"), Some(json!(2)));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.save("categories", &json!([{"name": "Bills"}])).unwrap();
        assert!(temp_dir.path().join("categories.json").exists());
        assert_eq!(store.load("categories"), Some(json!([{"name": "Bills"}])));
    }

    #[test]
    fn test_file_store_corrupted_reads_as_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        std::fs::write(store.key_path("categories"), "[{oops").unwrap();

        assert!(store.load("categories").is_none());
    }

    #[test]
    fn test_key_path_is_sanitized() {
        let store = JsonFileStore::new("/data");
        assert_eq!(store.key_path("net income/v2"), PathBuf::from("/data/net_income_v2.json"));
    }

    #[test]
    fn test_decode_list_keeps_readable_entries() {
        let numbers: Vec<u32> = decode_list(json!([1, "two", 3, null, 5]), "numbers");
        assert_eq!(numbers, vec![1, 3, 5]);
    }

    #[test]
    fn test_decode_list_non_array_is_empty() {
        let numbers: Vec<u32> = decode_list(json!({"oops": true}), "numbers");
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_save_value_typed() {
        let store = MemoryStore::new();
        save_value(&store, "names", &vec!["a", "b"]).unwrap();
        let names: Vec<String> = decode_list(store.load("names").unwrap(), "names");
        assert_eq!(names, vec!["a", "b"]);
    }
}
