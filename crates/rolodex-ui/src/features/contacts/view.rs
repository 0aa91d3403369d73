//! Contact picker view and effect runner.
//!
//! # Design
//! - Render purely from the store slice; all transitions go through `PickerAction`.
//! - Run effects in the order the reducer returns them (address first, then lookup).
//! - Lookups never surface errors to the user; failures are logged and dropped.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::IconCircleX;
use crate::components::atoms::{EmptyState, IconButton, SearchInput};
use crate::core::query::QueryPairs;
use crate::core::store::{AppStore, apply_picker_action};
use crate::features::contacts::actions::PickerAction;
use crate::features::contacts::api::fetch_candidates;
use crate::features::contacts::logic::UrlState;
use crate::features::contacts::state::{
    Candidate, LookupTicket, PickerEffect, select_dropdown_visible, select_show_reset,
    select_ticket_current,
};
use gloo::console;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Shared handle that applies actions and runs the effects they request.
#[derive(Clone)]
struct PickerDriver {
    dispatch: Dispatch<AppStore>,
    api_ctx: Option<ApiCtx>,
    navigator: Option<Navigator>,
    route: Route,
}

impl PickerDriver {
    fn send(&self, action: PickerAction) {
        let mut effects = Vec::new();
        self.dispatch.reduce_mut(|store| {
            effects = apply_picker_action(store, action);
        });
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: PickerEffect) {
        match effect {
            PickerEffect::ReplaceUrl(url) => self.replace_url(&url),
            PickerEffect::Lookup(ticket) => self.lookup(ticket),
        }
    }

    fn replace_url(&self, url: &UrlState) {
        let current = window().location().search().unwrap_or_default();
        let mut pairs = QueryPairs::parse(&current);
        url.write_into(&mut pairs);
        let Some(navigator) = self.navigator.as_ref() else {
            console::warn!("address update skipped: router unavailable");
            return;
        };
        if let Err(err) = navigator.replace_with_query(&self.route, &pairs) {
            console::warn!("address update failed", err.to_string());
        }
    }

    fn lookup(&self, ticket: LookupTicket) {
        let Some(api_ctx) = self.api_ctx.clone() else {
            console::error!("contact lookup skipped: api context missing");
            return;
        };
        let driver = self.clone();
        yew::platform::spawn_local(async move {
            let action = match fetch_candidates(&api_ctx.client, &ticket.term).await {
                Ok(candidates) => {
                    if !select_ticket_current(&driver.dispatch.get().picker, &ticket) {
                        console::debug!("dropping stale contact lookup", ticket.term.clone());
                    }
                    PickerAction::LookupSucceeded { ticket, candidates }
                }
                Err(err) => {
                    if select_ticket_current(&driver.dispatch.get().picker, &ticket) {
                        console::error!(
                            "contact lookup failed",
                            ticket.term.clone(),
                            err.to_string()
                        );
                    } else {
                        console::debug!(
                            "stale contact lookup failed",
                            ticket.term.clone(),
                            err.to_string()
                        );
                    }
                    PickerAction::LookupFailed { ticket }
                }
            };
            driver.send(action);
        });
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactPickerProps {
    #[prop_or(AttrValue::from("Search for supplier..."))]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::from("No matching contacts"))]
    pub empty_label: AttrValue,
}

#[function_component(ContactPicker)]
pub(crate) fn contact_picker(props: &ContactPickerProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Picker);

    let search_text = use_selector(|store: &AppStore| store.picker.search_text.clone());
    let candidates = use_selector(|store: &AppStore| store.picker.candidates.clone());
    let dropdown_open = use_selector(|store: &AppStore| select_dropdown_visible(&store.picker));
    let show_reset = use_selector(|store: &AppStore| select_show_reset(&store.picker));

    let driver = PickerDriver {
        dispatch,
        api_ctx,
        navigator,
        route,
    };

    let on_search = {
        let driver = driver.clone();
        Callback::from(move |text: String| driver.send(PickerAction::Typed(text)))
    };
    let on_click = {
        let driver = driver.clone();
        Callback::from(move |()| driver.send(PickerAction::InputClicked))
    };
    let on_reset = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.send(PickerAction::Reset))
    };

    html! {
        <div class="search">
            <SearchInput
                value={AttrValue::from((*search_text).clone())}
                placeholder={props.placeholder.clone()}
                aria_label={props.placeholder.clone()}
                on_search={on_search}
                on_click={on_click}
            />
            {if *dropdown_open {
                html! {
                    <div class="dropdown">
                        <ul>
                            {if candidates.is_empty() {
                                html! { <EmptyState title={props.empty_label.clone()} /> }
                            } else {
                                html! { <>{ for candidates.iter().map(|candidate| render_row(candidate, &driver)) }</> }
                            }}
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}
            {if *show_reset {
                html! {
                    <IconButton aria_label="Clear selection" onclick={on_reset}>
                        <IconCircleX size="5" />
                    </IconButton>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_row(candidate: &Candidate, driver: &PickerDriver) -> Html {
    let onclick = {
        let driver = driver.clone();
        let candidate = candidate.clone();
        Callback::from(move |_: MouseEvent| driver.send(PickerAction::Select(candidate.clone())))
    };
    html! {
        <li key={candidate.id.to_string()} class="dropdown-item" onclick={onclick}>
            {candidate.display_name.clone()}
        </li>
    }
}
