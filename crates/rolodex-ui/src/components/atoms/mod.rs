//! Shared UI atoms used by the picker.

pub(crate) mod empty_state;
pub(crate) mod icon_button;
pub(crate) mod icons;
pub(crate) mod search_input;

pub(crate) use empty_state::EmptyState;
pub(crate) use icon_button::IconButton;
pub(crate) use search_input::SearchInput;
