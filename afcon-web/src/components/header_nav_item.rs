use shared::navigation::NavLink;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_router::prelude::{Link, use_route};

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub link: NavLink,
    #[prop_or_default]
    pub on_select: Callback<()>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let current = use_route::<Route>();
    let Some(route) = Route::for_link(props.link) else {
        return html! {};
    };

    let active_route_class = if current == Some(route) {
        "font-bold underline underline-offset-4"
    } else {
        ""
    };
    let on_select = props.on_select.clone();

    html! {
        <li onclick={Callback::from(move |_: MouseEvent| on_select.emit(()))}>
            <Link<Route> to={route} classes={classes!("hover:text-gray-300", active_route_class)}>
                { props.link.label() }
            </Link<Route>>
        </li>
    }
}
