use shared::navigation::{NavLink, UserActions, main_links};
use yew::prelude::*;
use yew_hooks::use_click_away;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::components::{
    header_nav_item::HeaderNavItem, theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown,
};
use crate::hooks::use_session;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
struct SectionProps {
    #[prop_or_default]
    on_select: Callback<()>,
}

#[function_component(MainNavLinks)]
fn main_nav_links(props: &SectionProps) -> Html {
    html! {
        <ul class="flex flex-col md:flex-row items-center gap-5">
            { for main_links().into_iter().map(|link| html! {
                <HeaderNavItem {link} on_select={props.on_select.clone()} />
            }) }
        </ul>
    }
}

#[function_component(UserActionsMenu)]
fn user_actions_menu(props: &SectionProps) -> Html {
    let session = use_session();
    let actions = UserActions::for_session(&session);

    let entries = match &actions {
        UserActions::Account { username, .. } => html! {
            <UserDropdown
                username={username.clone()}
                menu={actions.links().to_vec()}
                on_select={props.on_select.clone()}
            />
        },
        UserActions::Guest { .. } => html! {
            { for actions.links().iter().copied().map(|link| guest_link(link, &props.on_select)) }
        },
    };

    html! {
        <ul class="flex items-center gap-4">
            { entries }
            <li><ThemeSwitcher /></li>
        </ul>
    }
}

fn guest_link(link: NavLink, on_select: &Callback<()>) -> Html {
    let Some(route) = Route::for_link(link) else {
        return html! {};
    };
    let class = if link == NavLink::Login {
        "bg-blue-500 hover:bg-blue-700 text-white px-3 py-1 rounded-md transition-colors duration-200"
    } else {
        "bg-green-500 hover:bg-green-700 text-white px-3 py-1 rounded-md transition-colors duration-200"
    };
    let on_select = on_select.clone();
    html! {
        <li onclick={Callback::from(move |_: MouseEvent| on_select.emit(()))}>
            <Link<Route> to={route} classes={class}>{ link.label() }</Link<Route>>
        </li>
    }
}

/// Site header: logo, main navigation, account actions and a mobile menu
/// that closes on any outside click.
#[function_component(Header)]
pub fn header() -> Html {
    let mobile_open = use_state(|| false);
    let mobile_menu = use_node_ref();

    {
        let mobile_open = mobile_open.clone();
        use_click_away(mobile_menu.clone(), move |_: Event| mobile_open.set(false));
    }

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };
    let close_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |()| mobile_open.set(false))
    };

    html! {
        <header class="bg-gray-800 text-white p-4 dark:bg-gray-900">
            <div class="container mx-auto flex justify-between items-center relative">
                <div class="flex items-center gap-4">
                    <div class="md:hidden">
                        <button onclick={toggle_mobile.clone()} class="p-2 focus:outline-none" aria-label="Open menu">
                            <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                        </button>
                    </div>
                    <h1 class="text-2xl font-bold">
                        <Link<Route> to={Route::Home}>{ "AFCON 2025" }</Link<Route>>
                    </h1>
                </div>
                <nav class="hidden md:block md:absolute md:left-1/2 md:-translate-x-1/2">
                    <MainNavLinks />
                </nav>
                <nav class="hidden md:block">
                    <UserActionsMenu />
                </nav>
            </div>
            if *mobile_open {
                <div ref={mobile_menu} class="fixed inset-0 bg-gray-800 bg-opacity-95 z-40 md:hidden">
                    <div class="flex justify-end p-4">
                        <button onclick={toggle_mobile} class="text-white p-2 focus:outline-none" aria-label="Close menu">
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" />
                        </button>
                    </div>
                    <div class="flex flex-col items-center gap-4 text-xl">
                        <MainNavLinks on_select={close_mobile.clone()} />
                        <UserActionsMenu on_select={close_mobile} />
                    </div>
                </div>
            }
        </header>
    }
}
