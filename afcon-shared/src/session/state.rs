use strum::{AsRefStr, Display};

use crate::models::UserProfile;

/// Client-side record of who, if anyone, is signed in.
///
/// `Unknown` exists only until the startup probe resolves and is never
/// re-entered. The profile lives inside `Authenticated`, so a user is
/// present exactly when the session is authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unknown,
    Authenticated(UserProfile),
    Anonymous,
}

/// Payload-free view of [`Session`], handy for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Unknown,
    Authenticated,
    Anonymous,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Unknown => SessionStatus::Unknown,
            Self::Authenticated(_) => SessionStatus::Authenticated,
            Self::Anonymous => SessionStatus::Anonymous,
        }
    }

    /// True until the startup probe has resolved.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Only meaningful once [`Session::is_loading`] is false.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    /// Applies the outcome of the startup probe.
    ///
    /// Has no effect once the session is resolved, so an explicit login or
    /// logout that completed while the probe was in flight is kept. Returns
    /// whether the session changed.
    pub fn resolve_probe(&mut self, profile: Option<UserProfile>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match profile {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        };
        true
    }

    pub fn login(&mut self, profile: UserProfile) {
        *self = Self::Authenticated(profile);
    }

    pub fn logout(&mut self) {
        *self = Self::Anonymous;
    }
}
