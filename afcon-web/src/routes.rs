use shared::navigation::NavLink;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage, error::NotFoundPage, home::HomePage, login::LoginPage,
    matches::MatchesPage, teams::TeamsPage, tickets::TicketsPage,
    under_construction::UnderConstruction,
};

/// Every page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/teams")]
    Teams,
    #[at("/matches")]
    Matches,
    #[at("/tickets")]
    Tickets,
    #[at("/change-password")]
    ChangePassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes rendered behind [`ProtectedRoute`].
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Matches | Self::Tickets)
    }

    /// Where a header link points. `Logout` is an action, not a page.
    pub fn for_link(link: NavLink) -> Option<Self> {
        match link {
            NavLink::Home => Some(Self::Home),
            NavLink::Teams => Some(Self::Teams),
            NavLink::Matches => Some(Self::Matches),
            NavLink::Tickets => Some(Self::Tickets),
            NavLink::Dashboard => Some(Self::Dashboard),
            NavLink::ChangePassword => Some(Self::ChangePassword),
            NavLink::Login => Some(Self::Login),
            NavLink::Register => Some(Self::Register),
            NavLink::Logout => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    tracing::debug!(path = %route.to_path(), "switching route");
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <UnderConstruction title="Register" /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Teams => html! { <TeamsPage /> },
        Route::Matches => html! { <MatchesPage /> },
        Route::Tickets => html! { <TicketsPage /> },
        Route::ChangePassword => html! { <UnderConstruction title="Change Password" /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    if route.is_protected() {
        html! { <ProtectedRoute>{page}</ProtectedRoute> }
    } else {
        page
    }
}
