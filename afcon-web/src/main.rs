mod app;
mod components;
mod containers;
mod hooks;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod routes_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use std::str::FromStr;

use app::App;
use tracing::Level;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

/// Console verbosity baked in at build time through `AFCON_LOG_LEVEL`.
fn log_level(value: Option<&str>) -> Level {
    value
        .and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(Level::INFO)
}

fn main() {
    console_error_panic_hook::set_once();
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(log_level(option_env!("AFCON_LOG_LEVEL")))
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
    tracing::info!("starting AFCON Tickets");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        tracing::error!("no document body to mount the application on");
        return;
    };

    Renderer::<Root>::with_root(body.into()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_level(None), Level::INFO);
        assert_eq!(log_level(Some("chatty")), Level::INFO);
    }

    #[test]
    fn log_level_accepts_names_in_any_case() {
        assert_eq!(log_level(Some("debug")), Level::DEBUG);
        assert_eq!(log_level(Some(" WARN ")), Level::WARN);
        assert_eq!(log_level(Some("trace")), Level::TRACE);
    }
}
