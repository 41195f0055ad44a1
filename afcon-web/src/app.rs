use shared::api::ApiClient;
use shared::session::SessionStore;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::containers::layout::Layout;
use crate::hooks::{use_api, use_theme_sync};
use crate::models::app_state::{AppSessionStore, AppState, StoreSessionCell};
use crate::routes::{Route, switch};

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let api = use_api();
    use_theme_sync();

    let store = {
        let api = api.clone();
        use_memo((), move |()| {
            SessionStore::new(api, StoreSessionCell::new(dispatch))
        })
    };

    {
        let store = (*store).clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                store.initialize().await;
            });
            || ()
        });
    }

    html! {
        <ContextProvider<ApiClient> context={api}>
            <ContextProvider<AppSessionStore> context={(*store).clone()}>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ContextProvider<AppSessionStore>>
        </ContextProvider<ApiClient>>
    }
}
