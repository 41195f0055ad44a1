use shared::models::{LoginRequest, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::navigator::Navigator;

use crate::components::inputs::field_setter;
use crate::hooks::{use_api, use_session_store};
use crate::models::app_state::AppSessionStore;
use crate::routes::Route;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

const INPUT_CLASS: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";

/// Records a user the backend just accepted and leaves for the home page.
pub fn finish_sign_in(
    store: Option<&AppSessionStore>,
    navigator: Option<&Navigator>,
    user: UserProfile,
) {
    match store {
        Some(store) => store.login(user),
        None => tracing::error!("signed in without a session store"),
    }
    if let Some(navigator) = navigator {
        navigator.push(&Route::Home);
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginRequest::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let api = use_api();
    let store = use_session_store();
    let navigator = use_navigator();

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = (*form).clone();
            if let Err(err) = request.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            loading.set(true);
            error.set(None);
            let api = api.clone();
            let store = store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api.login(&request).await {
                    Ok(response) => {
                        finish_sign_in(store.as_ref(), navigator.as_ref(), response.user);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "login failed");
                        error.set(Some(err.user_message(LOGIN_FAILED)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email = field_setter(&form, |form, value| form.email = value);
    let on_password = field_setter(&form, |form, value| form.password = value);
    let on_email_input = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            on_email.emit(input.value());
        }
    });
    let on_password_input = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            on_password.emit(input.value());
        }
    });

    let is_busy = *loading;

    html! {
        <div class="max-w-md mx-auto mt-8">
            <form {onsubmit} class="bg-white p-8 rounded-lg shadow-md dark:bg-gray-800">
                <h2 class="text-2xl font-bold mb-6 text-center">{ "Login" }</h2>
                if let Some(message) = &*error {
                    <p class="text-red-500 text-center mb-4" role="alert">{ message.clone() }</p>
                }
                <div class="mb-4">
                    <label class="block text-gray-700 dark:text-gray-300 text-sm font-bold mb-2" for="email">
                        { "Email" }
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Email"
                        class={INPUT_CLASS}
                        value={form.email.clone()}
                        oninput={on_email_input}
                    />
                </div>
                <div class="mb-6">
                    <label class="block text-gray-700 dark:text-gray-300 text-sm font-bold mb-2" for="password">
                        { "Password" }
                    </label>
                    <input
                        id="password"
                        type="password"
                        placeholder="******************"
                        class={INPUT_CLASS}
                        value={form.password.clone()}
                        oninput={on_password_input}
                    />
                </div>
                <div class="flex items-center justify-between">
                    <button
                        class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                        type="submit"
                        disabled={is_busy}
                    >
                        { if is_busy { "Signing in..." } else { "Sign In" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
