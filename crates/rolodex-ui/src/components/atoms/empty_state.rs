//! Empty dropdown row.
//!
//! # Design
//! - Keep copy prop-driven; the picker decides when it shows.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <li class={classes!("empty-state", props.class.clone())}>
            <span class="muted">{props.title.clone()}</span>
        </li>
    }
}
