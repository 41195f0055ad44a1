use yew::{Children, Html, Properties, function_component, html};

use crate::components::chatbot::Chatbot;
use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
            <Header />
            <main class="flex-grow container mx-auto px-4">
                { props.children.clone() }
            </main>
            <footer class="bg-gray-800 text-white p-4 mt-8">
                <div class="container mx-auto text-center">
                    <p>{ "© 2025 Afcon Worldcup Morocco. All rights reserved." }</p>
                </div>
            </footer>
            <Chatbot />
        </div>
    }
}
