use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: &Option<AttrValue>) -> Option<String> {
    size.as_ref().map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(&props.size) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Filled circle with a cross, used by the reset control.
#[function_component(IconCircleX)]
pub(crate) fn icon_circle_x(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="10" fill="currentColor" />
            <path d="m15 9l-6 6m0-6l6 6" stroke="white" />
        </> },
    )
}

#[function_component(IconSearch)]
pub(crate) fn icon_search(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="m21 21l-4.34-4.34" />
            <circle cx="11" cy="11" r="8" />
        </> },
    )
}
