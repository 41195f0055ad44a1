use shared::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loading::Loading;
use crate::hooks::use_session;
use crate::routes::Route;

/// Account overview. Sends signed-out visitors to the login page itself
/// instead of sitting behind the guard.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    {
        let anonymous = *session == Session::Anonymous;
        use_effect_with(anonymous, move |anonymous| {
            if *anonymous && let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if session.is_loading() {
        return html! { <Loading message="Loading user data..." /> };
    }
    let Some(user) = session.user() else {
        return html! {};
    };

    html! {
        <div class="max-w-md mx-auto mt-8 p-8 bg-white rounded-lg shadow-md dark:bg-gray-800">
            <h2 class="text-2xl font-bold mb-6 text-center dark:text-gray-100">
                { format!("Welcome, {}!", user.username) }
            </h2>
            <p class="text-gray-700 dark:text-gray-300">{ format!("Email: {}", user.email) }</p>
            <p class="text-gray-700 dark:text-gray-300">{ "Password: ***********" }</p>
            <p class="text-gray-700 dark:text-gray-300 mt-4">
                { "This is your dashboard. More content will be added here." }
            </p>
        </div>
    }
}
