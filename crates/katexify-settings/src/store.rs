//! Observable settings store
//!
//! Listeners are called synchronously, in subscription order, after every
//! successful write. Reads go through a cache filled from the backend on
//! first access.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::backend::{MemoryBackend, SettingsBackend};
use crate::error::Result;
use crate::settings::{FontType, Settings, SettingsPatch};

/// Backend key the settings are stored under
pub const STORAGE_KEY: &str = "foolish-settings";

/// Handle returned by [`SettingsStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Settings) + Send>;

pub struct SettingsStore<B: SettingsBackend = MemoryBackend> {
    backend: B,
    cached: Option<Settings>,
    listeners: IndexMap<ListenerId, Listener>,
    next_listener: u64,
}

impl<B: SettingsBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cached: None,
            listeners: IndexMap::new(),
            next_listener: 0,
        }
    }

    /// Settings to use before any backend is reachable
    pub fn server_snapshot() -> Settings {
        Settings::default()
    }

    /// Current settings, loading them on first use.
    pub fn snapshot(&mut self) -> &Settings {
        if self.cached.is_none() {
            self.cached = Some(self.load());
        }
        self.cached.get_or_insert_with(Settings::default)
    }

    fn load(&self) -> Settings {
        match self.backend.load(STORAGE_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(%err, "stored settings are not valid JSON, using defaults");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(err) => {
                warn!(%err, "failed to load settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Settings) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener; returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Merge `patch` into the current settings, persist, then notify.
    ///
    /// On a failed write the cache keeps its previous value and no listener
    /// is called.
    pub fn update(&mut self, patch: SettingsPatch) -> Result<()> {
        let updated = patch.apply(self.snapshot());
        let json = serde_json::to_string(&updated)?;
        if let Err(err) = self.backend.save(STORAGE_KEY, &json) {
            warn!(%err, "failed to save settings");
            return Err(err);
        }
        debug!(listeners = self.listeners.len(), "settings saved");

        self.cached = Some(updated);
        if let Some(settings) = self.cached.as_ref() {
            for listener in self.listeners.values_mut() {
                listener(settings);
            }
        }
        Ok(())
    }

    pub fn set_font_type(&mut self, font_type: FontType) -> Result<()> {
        self.update(SettingsPatch {
            font_type: Some(font_type),
            ..SettingsPatch::default()
        })
    }

    pub fn set_model_id(&mut self, model_id: impl Into<String>) -> Result<()> {
        self.update(SettingsPatch {
            model_id: Some(model_id.into()),
            ..SettingsPatch::default()
        })
    }

    pub fn set_prompt_template_id(&mut self, template_id: impl Into<String>) -> Result<()> {
        self.update(SettingsPatch {
            prompt_template_id: Some(template_id.into()),
            ..SettingsPatch::default()
        })
    }

    pub fn set_custom_prompt(&mut self, prompt: impl Into<String>) -> Result<()> {
        self.update(SettingsPatch {
            custom_prompt: Some(prompt.into()),
            ..SettingsPatch::default()
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl Default for SettingsStore<MemoryBackend> {
    fn default() -> Self {
        Self::new(MemoryBackend::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&Settings) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |settings: &Settings| {
            sink.lock().unwrap().push(settings.model_id.clone())
        })
    }

    #[test]
    fn test_empty_backend_yields_defaults() {
        let mut store = SettingsStore::default();
        assert_eq!(store.snapshot(), &Settings::default());
    }

    #[test]
    fn test_invalid_json_yields_defaults() {
        let mut store = SettingsStore::new(MemoryBackend::with_entry(STORAGE_KEY, "{not json"));
        assert_eq!(store.snapshot(), &Settings::default());
    }

    #[test]
    fn test_partial_json_merged() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, r#"{"customPrompt":"hi"}"#);
        let mut store = SettingsStore::new(backend);
        assert_eq!(store.snapshot().custom_prompt, "hi");
        assert_eq!(store.snapshot().prompt_template_id, "silly");
    }

    #[test]
    fn test_update_persists_and_notifies_in_order() {
        let mut store = SettingsStore::default();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..3 {
            let order = Arc::clone(&order);
            store.subscribe(move |_| order.lock().unwrap().push(n));
        }

        store.set_model_id("zai-org/glm-4.5").unwrap();

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(store.snapshot().model_id, "zai-org/glm-4.5");
        let stored = store.backend().get(STORAGE_KEY).unwrap();
        assert!(stored.contains("\"modelId\":\"zai-org/glm-4.5\""));
    }

    #[test]
    fn test_listener_fires_once_per_update() {
        let mut store = SettingsStore::default();
        let (seen, listener) = recorder();
        store.subscribe(listener);

        store.set_font_type(FontType::Serif).unwrap();
        store.set_model_id("moonshotai/kimi-k2-thinking").unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "deepseek/deepseek-v3.2-exp".to_string(),
                "moonshotai/kimi-k2-thinking".to_string()
            ]
        );
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let mut store = SettingsStore::default();
        let (seen, listener) = recorder();
        let id = store.subscribe(listener);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_custom_prompt("x").unwrap();

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_failed_save_keeps_state_and_skips_listeners() {
        let mut store = SettingsStore::new(MemoryBackend::new().read_only());
        let (seen, listener) = recorder();
        store.subscribe(listener);

        assert!(store.set_prompt_template_id("minke").is_err());

        assert_eq!(store.snapshot().prompt_template_id, "silly");
        assert!(seen.lock().unwrap().is_empty());
    }
}
