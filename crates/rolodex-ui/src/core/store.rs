//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Reducers live with their feature; the store only routes actions to them.

use crate::features::contacts::actions::{PickerAction, apply_action};
use crate::features::contacts::state::{PickerEffect, PickerState};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Contact picker state.
    pub picker: PickerState,
}

/// Route a picker action into the store and collect the effects it requests.
pub fn apply_picker_action(store: &mut AppStore, action: PickerAction) -> Vec<PickerEffect> {
    apply_action(&mut store.picker, action)
}
