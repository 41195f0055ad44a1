//! Mounting helpers for the in-browser component tests.

use gloo_timers::future::TimeoutFuture;
use shared::api::ApiClient;
use shared::config::ApiConfig;
use shared::session::{Session, SessionStore};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::hooks::use_session;
use crate::models::app_state::{AppSessionStore, AppState, StoreSessionCell};

/// Browsers refuse this port outright, so every request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

#[derive(Properties, PartialEq)]
pub struct SeedProps {
    pub session: Session,
    pub children: Children,
}

/// Puts `session` into the store before any child renders.
#[function_component(Seed)]
pub fn seed(props: &SeedProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    let session = props.session.clone();
    use_memo((), move |()| dispatch.reduce_mut(|state| state.session = session));
    html! { <>{ props.children.clone() }</> }
}

#[derive(Properties, PartialEq)]
pub struct WrapperProps {
    pub children: Children,
}

/// Provides a session store whose backend calls all fail at transport level.
#[function_component(OfflineSessionStore)]
pub fn offline_session_store(props: &WrapperProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    let store = use_memo((), move |()| {
        SessionStore::new(
            ApiClient::new(ApiConfig::new(UNREACHABLE_API)),
            StoreSessionCell::new(dispatch),
        )
    });
    html! {
        <ContextProvider<AppSessionStore> context={(*store).clone()}>
            { props.children.clone() }
        </ContextProvider<AppSessionStore>>
    }
}

/// Prints the session status so tests can read it from the DOM.
#[function_component(SessionStatusText)]
pub fn session_status_text() -> Html {
    let session = use_session();
    html! { <p id="session-status">{ session.status().to_string() }</p> }
}

/// Fresh element appended to the document body.
pub fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

pub fn text_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

pub fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Clicks the first button whose text is `label`.
pub fn click_button(root: &Element, label: &str) {
    let buttons = root.query_selector_all("button").unwrap();
    let button = (0..buttons.length())
        .filter_map(|index| buttons.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .find(|button| button.text_content().unwrap_or_default().trim() == label)
        .unwrap_or_else(|| panic!("no {label} button"));
    button.click();
}

/// Polls `done` for up to two seconds.
pub async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if done() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    done()
}
