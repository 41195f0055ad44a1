use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;

use super::state::Session;
use crate::api::ApiError;
use crate::models::UserProfile;

/// Backend calls the session store depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait SessionApi {
    /// Identity bound to the current session; any error means "not signed in".
    async fn current_user(&self) -> Result<UserProfile, ApiError>;

    /// Ends the session on the backend.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Where the store keeps the current [`Session`].
///
/// The browser app backs this with its yewdux store so that views re-render
/// on change; tests use [`LocalSessionCell`].
pub trait SessionCell {
    fn get(&self) -> Session;
    fn set(&self, session: Session);
}

/// Plain single-threaded cell.
#[derive(Debug, Clone, Default)]
pub struct LocalSessionCell(Rc<RefCell<Session>>);

impl SessionCell for LocalSessionCell {
    fn get(&self) -> Session {
        self.0.borrow().clone()
    }

    fn set(&self, session: Session) {
        *self.0.borrow_mut() = session;
    }
}

/// Single source of truth for authentication status.
///
/// Constructed once at application start and handed to the views that need
/// it. Clones share the same API handle, cell and probe flag.
pub struct SessionStore<A, C> {
    api: Rc<A>,
    cell: C,
    probe_started: Rc<Cell<bool>>,
}

impl<A, C: Clone> Clone for SessionStore<A, C> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            cell: self.cell.clone(),
            probe_started: Rc::clone(&self.probe_started),
        }
    }
}

impl<A, C> PartialEq for SessionStore<A, C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.probe_started, &other.probe_started)
    }
}

impl<A, C> fmt::Debug for SessionStore<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("probe_started", &self.probe_started.get())
            .finish_non_exhaustive()
    }
}

impl<A: SessionApi, C: SessionCell> SessionStore<A, C> {
    pub fn new(api: A, cell: C) -> Self {
        Self {
            api: Rc::new(api),
            cell,
            probe_started: Rc::new(Cell::new(false)),
        }
    }

    /// The backend handle the store was built with.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.cell.get()
    }

    /// Probes `/users/me` once per store and resolves the session.
    ///
    /// Later calls return immediately. A failed probe is the ordinary
    /// signed-out path and is only logged at debug level.
    pub async fn initialize(&self) {
        if self.probe_started.replace(true) {
            tracing::debug!("session probe already issued");
            return;
        }

        let profile = match self.api.current_user().await {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::debug!(
                    unauthorized = err.is_unauthorized(),
                    error = %err,
                    "session probe failed; continuing anonymously"
                );
                None
            }
        };

        let mut session = self.cell.get();
        if session.resolve_probe(profile) {
            tracing::info!(status = %session.status(), "session resolved");
            self.cell.set(session);
        } else {
            tracing::debug!("session already resolved; discarding probe result");
        }
    }

    /// Records a login the caller already completed against the backend.
    pub fn login(&self, profile: UserProfile) {
        tracing::info!(username = %profile.username, "signed in");
        let mut session = self.cell.get();
        session.login(profile);
        self.cell.set(session);
    }

    /// Ends the session on the backend and always clears it locally.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!(error = %err, "logout request failed; clearing local session anyway");
        }
        let mut session = self.cell.get();
        session.logout();
        self.cell.set(session);
        tracing::info!("signed out");
    }
}
