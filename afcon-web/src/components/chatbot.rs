use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::chat::{
    ChatMessage, ONBOARDING_DURATION_MS, REPLY_DELAY_MS, accept_input, bot_reply,
    initial_transcript,
};
use shared::preferences::{has_seen_onboarding, mark_onboarding_seen};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::storage::BrowserPreferences;

#[derive(Debug, Clone, PartialEq)]
struct Transcript(Vec<ChatMessage>);

impl Reducible for Transcript {
    type Action = ChatMessage;

    fn reduce(self: Rc<Self>, message: Self::Action) -> Rc<Self> {
        let mut messages = self.0.clone();
        messages.push(message);
        Rc::new(Self(messages))
    }
}

/// Floating support chat with canned replies.
#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let open = use_state(|| false);
    let show_onboarding = use_state(|| false);
    let input = use_state(String::new);
    let transcript = use_reducer(|| Transcript(initial_transcript()));

    {
        let show_onboarding = show_onboarding.clone();
        use_effect_with((), move |()| {
            let timer = (!has_seen_onboarding(&BrowserPreferences)).then(|| {
                show_onboarding.set(true);
                let show_onboarding = show_onboarding.clone();
                Timeout::new(ONBOARDING_DURATION_MS, move || {
                    show_onboarding.set(false);
                    mark_onboarding_seen(&BrowserPreferences);
                })
            });
            move || drop(timer)
        });
    }

    let toggle = {
        let open = open.clone();
        let show_onboarding = show_onboarding.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(!*open);
            show_onboarding.set(false);
            mark_onboarding_seen(&BrowserPreferences);
        })
    };

    let send = {
        let input = input.clone();
        let transcript = transcript.clone();
        Callback::from(move |()| {
            let Some(text) = accept_input(&input).map(str::to_owned) else {
                return;
            };
            transcript.dispatch(ChatMessage::user(text.clone()));
            input.set(String::new());

            let transcript = transcript.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                transcript.dispatch(ChatMessage::bot(bot_reply(&text)));
            })
            .forget();
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                input.set(target.value());
            }
        })
    };

    let on_keypress = {
        let send = send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                send.emit(());
            }
        })
    };

    let on_send_click = Callback::from(move |_: MouseEvent| send.emit(()));

    let toggle_class = classes!(
        "fixed",
        "bottom-8",
        "right-8",
        "bg-blue-500",
        "hover:bg-blue-700",
        "text-white",
        "rounded-full",
        "shadow-lg",
        "z-50",
        "p-3",
        show_onboarding.then_some("animate-pulse"),
    );

    html! {
        <div class="relative">
            if *show_onboarding {
                <div class="fixed bottom-24 right-8 bg-blue-500 text-white text-sm px-3 py-1 rounded-md shadow-lg animate-bounce z-50">
                    { "AI Assistant" }
                </div>
            }
            <button onclick={toggle} class={toggle_class} aria-label="Chat support">
                <Icon icon_id={IconId::HeroiconsSolidChatBubbleLeftRight} class="w-8 h-8" />
            </button>
            if *open {
                <div class="fixed bottom-24 right-8 w-80 bg-white rounded-lg shadow-lg z-50 dark:bg-gray-800 dark:text-gray-100">
                    <div class="p-4 border-b dark:border-gray-700">
                        <h3 class="text-lg font-bold">{ "Chat Support" }</h3>
                    </div>
                    <div class="p-4 h-64 overflow-y-auto">
                        { for transcript.0.iter().map(render_message) }
                    </div>
                    <div class="p-4 border-t dark:border-gray-700">
                        <div class="flex">
                            <input
                                type="text"
                                value={(*input).clone()}
                                oninput={on_input}
                                onkeypress={on_keypress}
                                class="flex-grow border rounded-l-lg p-2 focus:outline-none dark:bg-gray-700 dark:border-gray-600 dark:text-gray-100"
                            />
                            <button
                                onclick={on_send_click}
                                class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded-r-lg"
                            >
                                { "Send" }
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let (row, bubble) = if message.is_bot() {
        ("text-left", "bg-gray-200 dark:bg-gray-700 dark:text-gray-100")
    } else {
        ("text-right", "bg-blue-500 text-white")
    };
    html! {
        <div class={classes!("mb-2", row)}>
            <span class={classes!("inline-block", "p-2", "rounded-lg", bubble)}>
                { message.text.clone() }
            </span>
        </div>
    }
}
