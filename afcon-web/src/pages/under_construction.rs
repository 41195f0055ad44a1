use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct UnderConstructionProps {
    pub title: AttrValue,
}

/// Stand-in for account pages the ticketing API has no endpoint for yet.
#[function_component(UnderConstruction)]
pub fn under_construction(props: &UnderConstructionProps) -> Html {
    html! {
        <div class="max-w-md mx-auto mt-8 p-8 bg-white rounded-lg shadow-md dark:bg-gray-800">
            <h2 class="text-2xl font-bold mb-6 text-center">{ props.title.clone() }</h2>
            <p class="text-gray-700 dark:text-gray-300">
                { "This page is not available yet. Please check back later." }
            </p>
        </div>
    }
}
