use shared::session::GuardDecision;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loading::Loading;
use crate::hooks::use_session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only for a confirmed session.
///
/// While the startup probe is in flight a placeholder is shown. Once the
/// session resolves to anonymous the current history entry is replaced with
/// the login page. The redirect effect is keyed on the decision, so repeated
/// renders with the same outcome never navigate twice.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();
    let decision = GuardDecision::for_session(&session);
    let navigator = use_navigator();

    use_effect_with(decision, move |decision| {
        if let Some(target) = decision.redirect().and_then(Route::recognize) {
            match navigator {
                Some(navigator) => {
                    tracing::debug!(target = %target.to_path(), "no session; redirecting");
                    navigator.replace(&target);
                }
                None => tracing::error!("protected view rendered outside a router"),
            }
        }
        || ()
    });

    match decision {
        GuardDecision::Pending => html! { <Loading message="Loading authentication..." /> },
        GuardDecision::Allowed => html! { <>{ props.children.clone() }</> },
        GuardDecision::Denied => html! {},
    }
}
