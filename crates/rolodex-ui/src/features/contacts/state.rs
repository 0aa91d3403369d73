//! Contact picker state machine and pure transitions for testing outside wasm.
//!
//! # Design
//! - One record owns search text, selection, candidates and dropdown phase.
//! - Transitions return the side effects to run instead of running them.
//! - Effects are ordered: the address write always precedes the lookup.
//! - Lookups carry a ticket; only the newest ticket for the current term may land.

use crate::features::contacts::logic::{UrlState, lookup_term};

/// Selectable contact returned by a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Backend identifier (always positive).
    pub id: u64,
    /// Name shown in the dropdown and copied into the input on selection.
    pub display_name: String,
}

/// Dropdown lifecycle for the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// Dropdown closed with nothing committed in view.
    #[default]
    Idle,
    /// Dropdown open and tracking the search text.
    Browsing,
    /// Dropdown closed after a candidate was committed.
    Selected,
}

/// Correlates a lookup response with the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTicket {
    /// Monotonic request number.
    pub seq: u64,
    /// Term sent to the backend.
    pub term: String,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEffect {
    /// Replace the address query in place with this projection.
    ReplaceUrl(UrlState),
    /// Issue a lookup for the ticket's term.
    Lookup(LookupTicket),
}

/// Contact picker slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PickerState {
    /// Current input text.
    pub search_text: String,
    /// Committed contact id, kept until reset or a new selection.
    pub selected_id: Option<u64>,
    /// Pagination flag mirrored into the address.
    pub paginate: bool,
    /// Dropdown phase.
    pub phase: PickerPhase,
    /// Rows from the latest applied lookup.
    pub candidates: Vec<Candidate>,
    /// Sequence number of the most recently issued lookup.
    pub latest_lookup: u64,
}

/// Seed picker state from the address. No lookup is issued.
#[must_use]
pub fn initialize(url: &UrlState) -> PickerState {
    let selected_id = url.selected_id();
    PickerState {
        search_text: url.contact.clone(),
        selected_id,
        paginate: url.paginate,
        phase: if selected_id.is_some() {
            PickerPhase::Selected
        } else {
            PickerPhase::Idle
        },
        candidates: Vec::new(),
        latest_lookup: 0,
    }
}

/// Apply typed text. Unchanged text is a no-op.
///
/// Blank text closes the dropdown, drops candidates and asks for the
/// unfiltered list; any other text opens the dropdown and looks it up.
/// A held selection survives typing.
pub fn set_search_text(state: &mut PickerState, text: String) -> Vec<PickerEffect> {
    if state.search_text == text {
        return Vec::new();
    }
    state.search_text = text;
    if lookup_term(&state.search_text).is_empty() {
        state.candidates.clear();
        state.phase = PickerPhase::Idle;
    } else {
        state.phase = PickerPhase::Browsing;
    }
    let ticket = issue_lookup(state);
    vec![
        PickerEffect::ReplaceUrl(select_url_state(state)),
        PickerEffect::Lookup(ticket),
    ]
}

/// Commit a candidate. Does not look up the copied display name again.
pub fn select_candidate(state: &mut PickerState, candidate: &Candidate) -> Vec<PickerEffect> {
    state.search_text.clone_from(&candidate.display_name);
    state.selected_id = Some(candidate.id);
    state.paginate = true;
    state.phase = PickerPhase::Selected;
    vec![PickerEffect::ReplaceUrl(select_url_state(state))]
}

/// Clear everything and reopen the dropdown on the unfiltered list.
pub fn reset(state: &mut PickerState) -> Vec<PickerEffect> {
    state.search_text.clear();
    state.selected_id = None;
    state.paginate = false;
    state.candidates.clear();
    state.phase = PickerPhase::Browsing;
    let ticket = issue_lookup(state);
    vec![
        PickerEffect::ReplaceUrl(select_url_state(state)),
        PickerEffect::Lookup(ticket),
    ]
}

/// Pointer interaction on the input: open, refreshing the list when blank.
pub fn open_if_empty(state: &mut PickerState) -> Vec<PickerEffect> {
    state.phase = PickerPhase::Browsing;
    if lookup_term(&state.search_text).is_empty() {
        vec![PickerEffect::Lookup(issue_lookup(state))]
    } else {
        Vec::new()
    }
}

/// Replace candidates with a lookup result when the ticket is still current.
///
/// Returns `false` when the response was stale and dropped.
pub fn apply_lookup_success(
    state: &mut PickerState,
    ticket: &LookupTicket,
    candidates: Vec<Candidate>,
) -> bool {
    if !select_ticket_current(state, ticket) {
        return false;
    }
    state.candidates = candidates;
    true
}

fn issue_lookup(state: &mut PickerState) -> LookupTicket {
    state.latest_lookup += 1;
    LookupTicket {
        seq: state.latest_lookup,
        term: lookup_term(&state.search_text).to_string(),
    }
}

/// Whether a response for `ticket` may still be applied.
#[must_use]
pub fn select_ticket_current(state: &PickerState, ticket: &LookupTicket) -> bool {
    ticket.seq == state.latest_lookup && ticket.term == lookup_term(&state.search_text)
}

/// Whether the dropdown list should render.
#[must_use]
pub fn select_dropdown_visible(state: &PickerState) -> bool {
    state.phase == PickerPhase::Browsing
}

/// Whether the reset affordance should render.
#[must_use]
pub const fn select_show_reset(state: &PickerState) -> bool {
    state.selected_id.is_some()
}

/// Whether no selection is held.
#[must_use]
pub const fn select_pristine(state: &PickerState) -> bool {
    !select_show_reset(state)
}

/// Address projection of the current state.
#[must_use]
pub fn select_url_state(state: &PickerState) -> UrlState {
    UrlState {
        contact: state.search_text.clone(),
        id: state.selected_id.unwrap_or(0),
        paginate: state.paginate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryPairs;

    fn candidate(id: u64, name: &str) -> Candidate {
        Candidate {
            id,
            display_name: name.to_string(),
        }
    }

    fn lookup_of(effects: &[PickerEffect]) -> LookupTicket {
        effects
            .iter()
            .find_map(|effect| match effect {
                PickerEffect::Lookup(ticket) => Some(ticket.clone()),
                PickerEffect::ReplaceUrl(_) => None,
            })
            .expect("lookup effect")
    }

    fn url_of(effects: &[PickerEffect]) -> String {
        let url = effects
            .iter()
            .find_map(|effect| match effect {
                PickerEffect::ReplaceUrl(url) => Some(url.clone()),
                PickerEffect::Lookup(_) => None,
            })
            .expect("url effect");
        let mut pairs = QueryPairs::default();
        url.write_into(&mut pairs);
        pairs.to_query_string().expect("encode")
    }

    fn selected_globex() -> PickerState {
        let mut state = PickerState::default();
        let effects = set_search_text(&mut state, "Glo".into());
        let ticket = lookup_of(&effects);
        assert!(apply_lookup_success(
            &mut state,
            &ticket,
            vec![candidate(3, "Globex")]
        ));
        let chosen = state.candidates[0].clone();
        select_candidate(&mut state, &chosen);
        state
    }

    #[test]
    fn initialize_restores_selection_from_address() {
        let url = UrlState::from_query(&QueryPairs::parse("contact=Acme&id=7&paginate=true"));
        let state = initialize(&url);
        assert_eq!(state.search_text, "Acme");
        assert_eq!(state.selected_id, Some(7));
        assert!(state.paginate);
        assert!(select_show_reset(&state));
        assert!(!select_dropdown_visible(&state));
        assert_eq!(state.latest_lookup, 0);
    }

    #[test]
    fn initialize_with_bad_id_is_pristine() {
        let url = UrlState::from_query(&QueryPairs::parse("contact=Acme&id=notanumber"));
        let state = initialize(&url);
        assert_eq!(state.selected_id, None);
        assert!(select_pristine(&state));
        assert_eq!(state.phase, PickerPhase::Idle);
    }

    #[test]
    fn typing_writes_address_then_looks_up() {
        let mut state = PickerState::default();
        let effects = set_search_text(&mut state, "ac".into());
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], PickerEffect::ReplaceUrl(_)));
        assert_eq!(lookup_of(&effects).term, "ac");
        assert_eq!(url_of(&effects), "contact=ac&id=0&paginate=false");
        assert!(select_dropdown_visible(&state));
    }

    #[test]
    fn identical_text_is_ignored() {
        let mut state = PickerState::default();
        set_search_text(&mut state, "ac".into());
        assert!(set_search_text(&mut state, "ac".into()).is_empty());
    }

    #[test]
    fn clearing_text_closes_and_requests_unfiltered_list() {
        let mut state = PickerState::default();
        let ticket = lookup_of(&set_search_text(&mut state, "ac".into()));
        apply_lookup_success(&mut state, &ticket, vec![candidate(1, "Acme")]);
        let effects = set_search_text(&mut state, "  ".into());
        assert!(state.candidates.is_empty());
        assert!(!select_dropdown_visible(&state));
        assert_eq!(lookup_of(&effects).term, "");
    }

    #[test]
    fn selection_commits_text_id_and_address() {
        let mut state = PickerState::default();
        let ticket = lookup_of(&set_search_text(&mut state, "Glo".into()));
        apply_lookup_success(&mut state, &ticket, vec![candidate(3, "Globex")]);
        let chosen = state.candidates[0].clone();
        let effects = select_candidate(&mut state, &chosen);
        assert_eq!(state.search_text, "Globex");
        assert_eq!(state.selected_id, Some(3));
        assert_eq!(url_of(&effects), "contact=Globex&id=3&paginate=true");
        assert!(!select_dropdown_visible(&state));
        assert!(select_show_reset(&state));
        assert!(
            effects
                .iter()
                .all(|effect| matches!(effect, PickerEffect::ReplaceUrl(_)))
        );
    }

    #[test]
    fn typing_after_selection_keeps_selected_id() {
        let mut state = selected_globex();
        let effects = set_search_text(&mut state, "Globe".into());
        assert_eq!(state.selected_id, Some(3));
        assert!(select_show_reset(&state));
        assert!(select_dropdown_visible(&state));
        assert_eq!(url_of(&effects), "contact=Globe&id=3&paginate=true");
    }

    #[test]
    fn reset_clears_everything_and_reopens() {
        let mut state = selected_globex();
        let effects = reset(&mut state);
        assert_eq!(state.search_text, "");
        assert_eq!(state.selected_id, None);
        assert!(state.candidates.is_empty());
        assert!(select_dropdown_visible(&state));
        assert!(!select_show_reset(&state));
        assert_eq!(url_of(&effects), "contact=&id=0&paginate=false");
        assert_eq!(lookup_of(&effects).term, "");
    }

    #[test]
    fn click_on_blank_input_looks_up_unfiltered() {
        let mut state = PickerState::default();
        let effects = open_if_empty(&mut state);
        assert!(select_dropdown_visible(&state));
        let ticket = lookup_of(&effects);
        assert_eq!(ticket.term, "");
        let rows: Vec<Candidate> = (1..=25).map(|id| candidate(id, "Co")).collect();
        assert!(apply_lookup_success(&mut state, &ticket, rows));
        assert_eq!(state.candidates.len(), 25);
    }

    #[test]
    fn click_on_filled_input_only_opens() {
        let mut state = selected_globex();
        let effects = open_if_empty(&mut state);
        assert!(effects.is_empty());
        assert!(select_dropdown_visible(&state));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = PickerState::default();
        let first = lookup_of(&set_search_text(&mut state, "a".into()));
        let second = lookup_of(&set_search_text(&mut state, "ab".into()));
        assert!(apply_lookup_success(
            &mut state,
            &second,
            vec![candidate(2, "Abacus")]
        ));
        assert!(!apply_lookup_success(
            &mut state,
            &first,
            vec![candidate(1, "Acme")]
        ));
        assert_eq!(state.candidates, vec![candidate(2, "Abacus")]);
    }

    #[test]
    fn response_for_text_replaced_by_selection_is_dropped() {
        let mut state = PickerState::default();
        let pending = lookup_of(&set_search_text(&mut state, "Glo".into()));
        select_candidate(&mut state, &candidate(3, "Globex"));
        assert!(!apply_lookup_success(
            &mut state,
            &pending,
            vec![candidate(8, "Gloria")]
        ));
        assert!(state.candidates.is_empty());
    }

    #[test]
    fn ticket_goes_stale_once_text_moves_on() {
        let mut state = PickerState::default();
        let first = lookup_of(&set_search_text(&mut state, "a".into()));
        assert!(select_ticket_current(&state, &first));
        let second = lookup_of(&set_search_text(&mut state, "ac".into()));
        assert!(!select_ticket_current(&state, &first));
        assert!(select_ticket_current(&state, &second));
        select_candidate(&mut state, &candidate(1, "Acme"));
        assert!(!select_ticket_current(&state, &second));
    }
}
