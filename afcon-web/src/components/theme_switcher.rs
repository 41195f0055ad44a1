use shared::preferences::{Theme, save_theme};
use web_sys::window;
use yew::{Callback, Classes, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_dispatch;

use crate::hooks::use_theme;
use crate::models::app_state::AppState;
use crate::storage::BrowserPreferences;

/// Mirrors `theme` onto `<html>`: the `dark` class for utility styles and
/// `data-theme` for component styles.
pub fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    }
    .and_then(|()| root.set_attribute("data-theme", theme.as_ref()));
    if let Err(err) = result {
        tracing::warn!(%theme, error = ?err, "failed to apply theme");
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let theme = use_theme();
    let dispatch = use_dispatch::<AppState>();

    let toggle_theme = {
        let next = theme.toggled();
        Callback::from(move |_: yew::MouseEvent| {
            save_theme(&BrowserPreferences, next);
            dispatch.reduce_mut(|state| state.theme = next);
        })
    };

    // Moon offers dark mode, sun offers light mode.
    let (icon_id, label) = if theme.is_dark() {
        (IconId::HeroiconsSolidSun, "Light Mode")
    } else {
        (IconId::HeroiconsSolidMoon, "Dark Mode")
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="p-1 rounded-full focus:outline-none focus:ring-2 focus:ring-white"
                onclick={toggle_theme}
                aria-label={label}
                title={label}
            >
                <Icon {icon_id} class="h-6 w-6" />
            </button>
        </div>
    }
}
