//! Display theme and onboarding flag kept in browser local storage.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::config::{ONBOARDING_STORAGE_KEY, THEME_STORAGE_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// String key/value storage that survives reloads.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Saved theme, or [`Theme::Light`] when nothing valid is stored.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .read(THEME_STORAGE_KEY)
        .and_then(|value| Theme::from_str(value.trim()).ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &impl PreferenceStore, theme: Theme) {
    store.write(THEME_STORAGE_KEY, theme.as_ref());
}

pub fn has_seen_onboarding(store: &impl PreferenceStore) -> bool {
    store
        .read(ONBOARDING_STORAGE_KEY)
        .is_some_and(|value| !value.is_empty())
}

pub fn mark_onboarding_seen(store: &impl PreferenceStore) {
    store.write(ONBOARDING_STORAGE_KEY, "true");
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryPreferences(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryPreferences {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn theme_defaults_to_light() {
        let store = MemoryPreferences::default();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn theme_round_trips_through_storage_key() {
        let store = MemoryPreferences::default();
        save_theme(&store, Theme::Dark);
        assert_eq!(store.read("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn garbage_theme_value_falls_back_to_light() {
        let store = MemoryPreferences::default();
        store.write(THEME_STORAGE_KEY, "solarized");
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn toggling_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn onboarding_flag_is_persisted_under_fixed_key() {
        let store = MemoryPreferences::default();
        assert!(!has_seen_onboarding(&store));
        mark_onboarding_seen(&store);
        assert_eq!(store.read("hasVisitedChatbot").as_deref(), Some("true"));
        assert!(has_seen_onboarding(&store));
    }
}
