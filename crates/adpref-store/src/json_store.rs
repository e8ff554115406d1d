use std::path::{Path, PathBuf};

use adpref_core::{RatedItem, Storage};

use crate::{read_json_list, StoreError};

/// History kept as one pretty-printed JSON array, rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_items(&self, items: &[RatedItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json =
            serde_json::to_string_pretty(items).map_err(|e| StoreError::json(&self.path, e))?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl Storage for JsonStore {
    type Error = StoreError;

    fn load_items(&self) -> Result<Vec<RatedItem>, StoreError> {
        let items: Vec<RatedItem> = read_json_list(&self.path)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded history");
        Ok(items)
    }

    fn append_all_and_persist(&self, items: Vec<RatedItem>) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut all = self.load_items()?;
        let added = items.len();
        all.extend(items);
        self.write_items(&all)?;

        tracing::info!(
            path = %self.path.display(),
            added,
            total = all.len(),
            "persisted history"
        );
        Ok(())
    }
}
