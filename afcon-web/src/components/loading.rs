use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

/// Centered one-line status shown while a page waits on data.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <p class="text-center mt-8 animate-pulse">{ props.message.clone() }</p>
    }
}

/// Page-level failure message.
#[derive(Properties, PartialEq)]
pub struct PageErrorProps {
    pub message: AttrValue,
}

#[function_component(PageError)]
pub fn page_error(props: &PageErrorProps) -> Html {
    html! {
        <p class="text-center mt-8 text-red-500" role="alert">{ props.message.clone() }</p>
    }
}
