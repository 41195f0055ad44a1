use super::state::Session;

/// Path protected views send signed-out visitors to.
pub const LOGIN_PATH: &str = "/login";

/// What a protected view should do for the current session.
///
/// Derived entirely from [`Session`]; the guard keeps no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup probe still in flight: show a placeholder, do not redirect.
    Pending,
    /// Render the protected view.
    Allowed,
    /// Replace the current history entry with the login page.
    Denied,
}

impl GuardDecision {
    pub fn for_session(session: &Session) -> Self {
        match session {
            Session::Unknown => Self::Pending,
            Session::Authenticated(_) => Self::Allowed,
            Session::Anonymous => Self::Denied,
        }
    }

    pub fn renders_protected(self) -> bool {
        self == Self::Allowed
    }

    /// The redirect to issue on entering this decision, if any.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Denied => Some(LOGIN_PATH),
            Self::Pending | Self::Allowed => None,
        }
    }
}
