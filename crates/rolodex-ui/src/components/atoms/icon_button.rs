use yew::prelude::*;

/// Props for icon-only buttons beside the input.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <button
            class={classes!("icon-btn", "ghost", props.class.clone())}
            type="button"
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
