use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::models::UserProfile;
use shared::session::Session;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

use crate::components::protected_route::ProtectedRoute;
use crate::test_support::{Seed, mount_point};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    session: Session,
    history: AnyHistory,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    html! {
        <YewduxRoot>
            <Seed session={props.session.clone()}>
                <Router history={props.history.clone()}>
                    <ProtectedRoute>
                        <p id="secret">{ "tickets for members" }</p>
                    </ProtectedRoute>
                </Router>
            </Seed>
        </YewduxRoot>
    }
}

struct Rendered {
    text: String,
    path: String,
    navigations: u32,
}

async fn render_with(session: Session) -> Rendered {
    let history = AnyHistory::from(MemoryHistory::with_entries(vec!["/matches"]));
    let navigations = Rc::new(Cell::new(0));
    let _listener = {
        let navigations = Rc::clone(&navigations);
        history.listen(move || navigations.set(navigations.get() + 1))
    };

    let root = mount_point();

    yew::Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            session,
            history: history.clone(),
        },
    )
    .render();
    TimeoutFuture::new(50).await;

    Rendered {
        text: root.text_content().unwrap_or_default(),
        path: history.location().path().to_string(),
        navigations: navigations.get(),
    }
}

#[wasm_bindgen_test]
async fn pending_session_shows_placeholder_without_redirect() {
    let rendered = render_with(Session::Unknown).await;
    assert!(rendered.text.contains("Loading authentication..."));
    assert!(!rendered.text.contains("tickets for members"));
    assert_eq!(rendered.path, "/matches");
    assert_eq!(rendered.navigations, 0);
}

#[wasm_bindgen_test]
async fn anonymous_session_redirects_to_login_once() {
    let rendered = render_with(Session::Anonymous).await;
    assert!(!rendered.text.contains("tickets for members"));
    assert_eq!(rendered.path, "/login");
    assert_eq!(rendered.navigations, 1);
}

#[wasm_bindgen_test]
async fn authenticated_session_renders_children() {
    let session = Session::Authenticated(UserProfile::new("amina", "amina@example.com"));
    let rendered = render_with(session).await;
    assert!(rendered.text.contains("tickets for members"));
    assert_eq!(rendered.path, "/matches");
    assert_eq!(rendered.navigations, 0);
}
