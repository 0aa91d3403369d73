//! Routing definitions for the Rolodex UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Picker,
    #[not_found]
    #[at("/404")]
    NotFound,
}
