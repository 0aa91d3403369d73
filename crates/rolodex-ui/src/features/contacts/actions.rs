//! Contact picker actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Typing and selecting are distinct actions so selection never re-triggers a lookup.
//! - Actions are UI-only and never perform side effects.

use crate::features::contacts::state::{
    Candidate, LookupTicket, PickerEffect, PickerState, apply_lookup_success, open_if_empty,
    reset, select_candidate, set_search_text,
};

/// High-level picker events from the UI and the lookup client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// The user edited the input text.
    Typed(String),
    /// The user clicked the input.
    InputClicked,
    /// The user picked a dropdown row.
    Select(Candidate),
    /// The user pressed the reset control.
    Reset,
    /// A lookup completed successfully.
    LookupSucceeded {
        /// Ticket issued with the request.
        ticket: LookupTicket,
        /// Decoded rows.
        candidates: Vec<Candidate>,
    },
    /// A lookup failed (transport or non-2xx status). Candidates are kept as they were.
    LookupFailed {
        /// Ticket issued with the request.
        ticket: LookupTicket,
    },
}

/// Apply an action to picker state and return the effects to run, in order.
pub fn apply_action(state: &mut PickerState, action: PickerAction) -> Vec<PickerEffect> {
    match action {
        PickerAction::Typed(text) => set_search_text(state, text),
        PickerAction::InputClicked => open_if_empty(state),
        PickerAction::Select(candidate) => select_candidate(state, &candidate),
        PickerAction::Reset => reset(state),
        PickerAction::LookupSucceeded { ticket, candidates } => {
            apply_lookup_success(state, &ticket, candidates);
            Vec::new()
        }
        PickerAction::LookupFailed { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contacts::state::{select_dropdown_visible, select_show_reset};

    fn ticket_from(effects: &[PickerEffect]) -> LookupTicket {
        match effects.last() {
            Some(PickerEffect::Lookup(ticket)) => ticket.clone(),
            other => panic!("expected lookup, got {other:?}"),
        }
    }

    #[test]
    fn typing_then_selecting_runs_one_lookup() {
        let mut state = PickerState::default();
        let effects = apply_action(&mut state, PickerAction::Typed("Glo".into()));
        let ticket = ticket_from(&effects);
        let globex = Candidate {
            id: 3,
            display_name: "Globex".into(),
        };
        apply_action(
            &mut state,
            PickerAction::LookupSucceeded {
                ticket,
                candidates: vec![globex.clone()],
            },
        );
        let effects = apply_action(&mut state, PickerAction::Select(globex));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], PickerEffect::ReplaceUrl(_)));
        assert!(select_show_reset(&state));
    }

    #[test]
    fn failure_leaves_rows_untouched() {
        let mut state = PickerState::default();
        let ticket = ticket_from(&apply_action(&mut state, PickerAction::InputClicked));
        let rows = vec![
            Candidate {
                id: 1,
                display_name: "Acme".into(),
            },
            Candidate {
                id: 2,
                display_name: "Abacus".into(),
            },
        ];
        apply_action(
            &mut state,
            PickerAction::LookupSucceeded {
                ticket,
                candidates: rows.clone(),
            },
        );
        let ticket = ticket_from(&apply_action(&mut state, PickerAction::Typed("x".into())));
        let effects = apply_action(&mut state, PickerAction::LookupFailed { ticket });
        assert!(effects.is_empty());
        assert_eq!(state.candidates, rows);
        assert!(select_dropdown_visible(&state));
    }

    #[test]
    fn reset_action_reopens_dropdown() {
        let mut state = PickerState::default();
        let effects = apply_action(&mut state, PickerAction::Reset);
        assert_eq!(effects.len(), 2);
        assert!(select_dropdown_visible(&state));
    }
}
