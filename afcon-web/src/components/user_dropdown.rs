use shared::navigation::NavLink;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_click_away;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::hooks::use_session_store;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct UserDropdownProps {
    pub username: AttrValue,
    pub menu: Vec<NavLink>,
    /// Fired after any entry is chosen, so an enclosing menu can close too.
    #[prop_or_default]
    pub on_select: Callback<()>,
}

/// Profile button with the signed-in user's menu.
#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator();
    let store = use_session_store();
    let open = use_state(|| false);
    let node = use_node_ref();

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: Event| open.set(false));
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let close = {
        let open = open.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |()| {
            open.set(false);
            on_select.emit(());
        })
    };

    let logout = {
        let close = close.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            close.emit(());
            let Some(store) = store.clone() else {
                tracing::error!("logout requested without a session store");
                return;
            };
            let navigator = navigator.clone();
            spawn_local(async move {
                store.logout().await;
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            });
        })
    };

    let entry = |link: NavLink| -> Html {
        if link.is_action() {
            return html! {
                <button
                    onclick={logout.clone()}
                    class="block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    { link.label() }
                </button>
            };
        }
        let Some(route) = Route::for_link(link) else {
            return html! {};
        };
        let close = close.clone();
        html! {
            <span onclick={Callback::from(move |_: MouseEvent| close.emit(()))}>
                <Link<Route>
                    to={route}
                    classes="block px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    { link.label() }
                </Link<Route>>
            </span>
        }
    };

    html! {
        <li class="relative" ref={node}>
            <button
                onclick={toggle}
                class="p-1 rounded-full focus:outline-none focus:ring-2 focus:ring-white"
                aria-label="Profile"
                title={props.username.clone()}
            >
                <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="w-8 h-8" />
            </button>
            if *open {
                <div class="absolute right-0 mt-2 w-48 bg-white dark:bg-gray-800 rounded-md shadow-lg py-1 z-20">
                    <p class="px-4 py-2 text-sm font-semibold text-gray-900 dark:text-gray-100">
                        { props.username.clone() }
                    </p>
                    { for props.menu.iter().copied().map(entry) }
                </div>
            }
        </li>
    }
}
