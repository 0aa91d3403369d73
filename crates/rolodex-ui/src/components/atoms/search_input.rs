//! Controlled search input for the picker.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit every edit to the caller; requests are not debounced.
//! - Adopt values pushed from above (selection, reset) without echoing them back.

use crate::components::atoms::icons::IconSearch;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub on_click: Callback<()>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = use_state(|| props.value.to_string());

    {
        let value_state = value_state.clone();
        let incoming = props.value.clone();
        use_effect_with_deps(
            move |incoming| {
                let next = incoming.to_string();
                if *value_state != next {
                    value_state.set(next);
                }
                || ()
            },
            incoming,
        );
    }

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let next = input.value();
                value_state.set(next.clone());
                on_search.emit(next);
            }
        })
    };

    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <label class={classes!("input", props.class.clone())}>
            <IconSearch class="text-base-content/80" size="3.5" />
            <input
                class="text-base placeholder:text-sm"
                type="text"
                placeholder={props.placeholder.clone()}
                value={AttrValue::from((*value_state).clone())}
                aria-label={props.aria_label.clone()}
                oninput={oninput}
                onclick={onclick}
            />
        </label>
    }
}
