//! Controlled form fields shared by the management pages.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const FIELD_CLASS: &str =
    "p-2 border rounded dark:bg-gray-700 dark:border-gray-600 dark:text-gray-100";

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <input
            type={props.input_type.clone()}
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
            class={FIELD_CLASS}
            required=true
        />
    }
}

/// One `<option>`: submitted value and visible label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    /// Label of the empty first option.
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <select name={props.name.clone()} {onchange} class={FIELD_CLASS} required=true>
            <option value="" selected={props.value.is_empty()}>{ props.placeholder.clone() }</option>
            { for props.options.iter().map(|option| html! {
                <option
                    value={option.value.clone()}
                    selected={*option.value == *props.value}
                >
                    { option.label.clone() }
                </option>
            }) }
        </select>
    }
}

/// Callback writing one field of a form kept in `state`.
pub fn field_setter<T>(state: &UseStateHandle<T>, update: fn(&mut T, String)) -> Callback<String>
where
    T: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |value| {
        let mut next = (*state).clone();
        update(&mut next, value);
        state.set(next);
    })
}
