pub mod chatbot;
pub mod header_nav_item;
pub mod inputs;
pub mod loading;
pub mod protected_route;
pub mod theme_switcher;
pub mod user_dropdown;

#[cfg(all(test, target_arch = "wasm32"))]
mod protected_route_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod theme_switcher_test;
