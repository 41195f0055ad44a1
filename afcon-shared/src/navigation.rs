//! Link set shown by the header, as a pure function of the session.

use strum::{EnumIter, IntoEnumIterator};

use crate::session::Session;

/// Every entry the header can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum NavLink {
    Home,
    Teams,
    Matches,
    Tickets,
    Dashboard,
    ChangePassword,
    Logout,
    Login,
    Register,
}

impl NavLink {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Teams => "Teams",
            Self::Matches => "Matches",
            Self::Tickets => "Tickets",
            Self::Dashboard => "Dashboard",
            Self::ChangePassword => "Change Password",
            Self::Logout => "Logout",
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// `Logout` triggers an action instead of navigating directly.
    pub fn is_action(self) -> bool {
        self == Self::Logout
    }

    /// Links shown to every visitor regardless of session.
    pub fn is_main(self) -> bool {
        matches!(self, Self::Home | Self::Teams | Self::Matches | Self::Tickets)
    }
}

/// Site navigation, identical for every visitor.
pub fn main_links() -> Vec<NavLink> {
    NavLink::iter().filter(|link| link.is_main()).collect()
}

/// Account area of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserActions {
    /// Profile menu for a signed-in user.
    Account {
        username: String,
        menu: Vec<NavLink>,
    },
    /// Entry points for everyone else, including while the probe is pending.
    Guest { links: Vec<NavLink> },
}

impl UserActions {
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            Some(user) => Self::Account {
                username: user.username.clone(),
                menu: vec![NavLink::Dashboard, NavLink::ChangePassword, NavLink::Logout],
            },
            None => Self::Guest {
                links: vec![NavLink::Login, NavLink::Register],
            },
        }
    }

    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Account { menu, .. } => menu,
            Self::Guest { links } => links,
        }
    }
}
