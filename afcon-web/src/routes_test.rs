//! Route table checks.

#[cfg(test)]
mod tests {
    use shared::navigation::NavLink;
    use shared::session::LOGIN_PATH;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    use crate::routes::Route;

    #[test]
    fn login_route_matches_guard_redirect_target() {
        assert_eq!(Route::Login.to_path(), LOGIN_PATH);
        assert_eq!(Route::recognize(LOGIN_PATH), Some(Route::Login));
    }

    #[test]
    fn only_matches_and_tickets_are_guarded() {
        let protected: Vec<Route> = Route::iter().filter(|r| r.is_protected()).collect();
        assert_eq!(protected, vec![Route::Matches, Route::Tickets]);
        assert!(!Route::Dashboard.is_protected());
        assert!(!Route::Teams.is_protected());
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
        assert_eq!(Route::ChangePassword.to_path(), "/change-password");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn every_link_but_logout_has_a_page() {
        for link in NavLink::iter() {
            assert_eq!(Route::for_link(link).is_none(), link.is_action());
        }
        assert_eq!(Route::for_link(NavLink::Register), Some(Route::Register));
    }
}
