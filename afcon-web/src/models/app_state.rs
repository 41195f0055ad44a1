use std::fmt;

use shared::api::ApiClient;
use shared::preferences::Theme;
use shared::session::{Session, SessionCell, SessionStore};
use yewdux::{Dispatch, Store};

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
    /// Shared by every theme toggle on the page.
    pub theme: Theme,
}

/// Keeps the session inside the yewdux store so every view selecting it
/// re-renders when it changes.
#[derive(Clone)]
pub struct StoreSessionCell(Dispatch<AppState>);

impl StoreSessionCell {
    pub fn new(dispatch: Dispatch<AppState>) -> Self {
        Self(dispatch)
    }
}

impl fmt::Debug for StoreSessionCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreSessionCell")
            .field(&self.0.get().session.status())
            .finish()
    }
}

impl SessionCell for StoreSessionCell {
    fn get(&self) -> Session {
        self.0.get().session.clone()
    }

    fn set(&self, session: Session) {
        self.0.reduce_mut(|state| state.session = session);
    }
}

/// The session store as wired up in the browser.
pub type AppSessionStore = SessionStore<ApiClient, StoreSessionCell>;
