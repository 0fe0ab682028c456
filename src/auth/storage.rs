use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::prelude::*;

/// String key-value store in the manner of browser local storage.
pub trait Storage: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result;

    fn remove(&mut self, key: &str) -> Result;
}

#[cfg(test)]
#[must_use]
#[derive(Debug, Default)]
pub struct MemoryStorage(BTreeMap<String, String>);

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result {
        self.0.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result {
        self.0.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change.
#[must_use]
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage, starting empty when the file does not exist yet.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.is_file() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("`{}` is not a storage file", path.display()))?
        } else {
            BTreeMap::new()
        };
        debug!(n_entries = entries.len(), "opened");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write `{}`", self.path.display()))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result {
        if self.entries.remove(key).is_some() { self.flush() } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("powerplan-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_memory_storage() -> Result {
        let mut storage = MemoryStorage::default();
        assert_eq!(storage.get("user")?, None);
        storage.set("user", "jane".into())?;
        assert_eq!(storage.get("user")?.as_deref(), Some("jane"));
        storage.remove("user")?;
        assert_eq!(storage.get("user")?, None);
        Ok(())
    }

    #[test]
    fn test_file_storage_persists() -> Result {
        let path = temp_path("persists");
        let _ = std::fs::remove_file(&path);

        let mut storage = FileStorage::open(&path)?;
        storage.set("user", "jane".into())?;
        storage.set("session", "jane".into())?;
        storage.remove("session")?;

        let reopened = FileStorage::open(&path)?;
        assert_eq!(reopened.get("user")?.as_deref(), Some("jane"));
        assert_eq!(reopened.get("session")?, None);

        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_file_storage_rejects_garbage() -> Result {
        let path = temp_path("garbage");
        std::fs::write(&path, "not json")?;
        assert!(FileStorage::open(&path).is_err());
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
