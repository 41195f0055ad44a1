use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use shared::config::THEME_STORAGE_KEY;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yewdux::YewduxRoot;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::hooks::use_theme_sync;
use crate::test_support::{click, mount_point};

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Page)]
fn page() -> Html {
    use_theme_sync();
    html! {
        <>
            <nav id="desktop"><ThemeSwitcher /></nav>
            <nav id="mobile"><ThemeSwitcher /></nav>
        </>
    }
}

#[function_component(Harness)]
fn harness() -> Html {
    html! {
        <YewduxRoot>
            <Page />
        </YewduxRoot>
    }
}

fn label(root: &web_sys::Element, nav: &str) -> String {
    root.query_selector(&format!("#{nav} button"))
        .unwrap()
        .and_then(|button| button.get_attribute("aria-label"))
        .unwrap_or_default()
}

fn document_theme() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|html| html.get_attribute("data-theme"))
}

#[wasm_bindgen_test]
async fn toggling_one_switcher_updates_every_switcher() {
    LocalStorage::delete(THEME_STORAGE_KEY);
    let root = mount_point();
    yew::Renderer::<Harness>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;
    assert_eq!(label(&root, "desktop"), "Dark Mode");
    assert_eq!(label(&root, "mobile"), "Dark Mode");

    click(&root, "#desktop button");
    TimeoutFuture::new(20).await;

    assert_eq!(label(&root, "desktop"), "Light Mode");
    assert_eq!(label(&root, "mobile"), "Light Mode");
    assert_eq!(document_theme().as_deref(), Some("dark"));
    let saved = LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten();
    assert_eq!(saved.as_deref(), Some("dark"));

    click(&root, "#mobile button");
    TimeoutFuture::new(20).await;
    assert_eq!(label(&root, "desktop"), "Dark Mode");
    assert_eq!(document_theme().as_deref(), Some("light"));
    LocalStorage::delete(THEME_STORAGE_KEY);
}

#[wasm_bindgen_test]
async fn saved_theme_is_loaded_once_for_the_whole_page() {
    LocalStorage::raw().set_item(THEME_STORAGE_KEY, "dark").unwrap();
    let root = mount_point();
    yew::Renderer::<Harness>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    assert_eq!(label(&root, "desktop"), "Light Mode");
    assert_eq!(label(&root, "mobile"), "Light Mode");
    assert_eq!(document_theme().as_deref(), Some("dark"));
    LocalStorage::delete(THEME_STORAGE_KEY);
}
