use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="max-w-md mx-auto mt-8 p-8 text-center">
            <h2 class="text-2xl font-bold mb-4">{ "Page not found" }</h2>
            <p class="mb-6">{ "The page you are looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes="text-blue-500 hover:underline">
                { "Back to home" }
            </Link<Route>>
        </div>
    }
}
