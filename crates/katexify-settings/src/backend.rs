//! Where settings are kept between sessions

use indexmap::IndexMap;

use crate::error::{Result, SettingsError};

/// Key-value storage for serialized settings
pub trait SettingsBackend {
    /// Stored value for `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: IndexMap<String, String>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries,
            read_only: false,
        }
    }

    /// Reject every write, like storage that is full or disabled
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(SettingsError::backend("storage is read-only"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
