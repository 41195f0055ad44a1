//! Accessors for the application-wide handles provided by [`crate::app::App`].

use std::rc::Rc;

use shared::api::ApiClient;
use shared::config::ApiConfig;
use shared::preferences::{Theme, load_theme};
use shared::session::Session;
use yew::{hook, use_context, use_effect_with, use_memo};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::components::theme_switcher::apply_theme;
use crate::models::app_state::{AppSessionStore, AppState};
use crate::storage::BrowserPreferences;

/// Current session; the calling component re-renders when it changes.
#[hook]
pub fn use_session() -> Rc<Session> {
    use_selector(|state: &AppState| state.session.clone())
}

/// Current display theme.
#[hook]
pub fn use_theme() -> Rc<Theme> {
    use_selector(|state: &AppState| state.theme)
}

/// Loads the saved theme into the store on first render and mirrors every
/// later change onto the document.
#[hook]
pub fn use_theme_sync() {
    let dispatch = use_dispatch::<AppState>();
    use_memo((), move |()| {
        let saved = load_theme(&BrowserPreferences);
        dispatch.reduce_mut(|state| state.theme = saved);
    });

    let theme = use_theme();
    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });
}

/// The store that owns the session, if rendered under the app root.
#[hook]
pub fn use_session_store() -> Option<AppSessionStore> {
    use_context::<AppSessionStore>()
}

/// API client from context, or one built from the compile-time config.
#[hook]
pub fn use_api() -> ApiClient {
    let provided = use_context::<ApiClient>();
    let fallback = use_memo((), |()| ApiClient::new(ApiConfig::from_env()));
    provided.unwrap_or_else(|| (*fallback).clone())
}
