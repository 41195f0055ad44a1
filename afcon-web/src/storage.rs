use gloo_storage::{LocalStorage, Storage};
use shared::preferences::PreferenceStore;

/// [`PreferenceStore`] over `window.localStorage`. Values are stored as raw
/// strings so they stay readable by other tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreferences;

impl PreferenceStore for BrowserPreferences {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, error = ?err, "failed to persist preference");
        }
    }
}
