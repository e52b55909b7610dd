//! Header checkbox that selects or clears every visible row
//!
//! # Example
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     keys=Signal::derive(move || rows.get().iter().map(|r| r.id).collect())
//!     selected=selected
//!     on_change=Callback::new(move |check_all: bool| { /* select or clear */ })
//! />
//! ```

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Tri-state of the header checkbox for the given visible keys
pub(crate) fn checkbox_state<K: Eq + Hash>(keys: &[K], selected: &HashSet<K>) -> CheckboxState {
    if keys.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = keys.iter().filter(|k| selected.contains(*k)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == keys.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

#[component]
pub fn TableHeaderCheckbox<K>(
    /// Keys of all visible rows
    #[prop(into)]
    keys: Signal<Vec<K>>,

    /// Selected keys
    #[prop(into)]
    selected: Signal<HashSet<K>>,

    /// true = select all, false = clear
    on_change: Callback<bool>,
) -> impl IntoView
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    let state = Signal::derive(move || selected.with(|sel| keys.with(|k| checkbox_state(k, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state.get(), CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        let keys = vec![1, 2, 3];
        assert_eq!(checkbox_state(&keys, &HashSet::new()), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(&keys, &HashSet::from([2])), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(&keys, &HashSet::from([1, 2, 3])), CheckboxState::Checked);
        assert_eq!(checkbox_state::<u32>(&[], &HashSet::from([1])), CheckboxState::Unchecked);
    }

    #[test]
    fn test_selection_of_hidden_rows_is_ignored() {
        let keys = vec![1, 2];
        assert_eq!(checkbox_state(&keys, &HashSet::from([1, 2, 9])), CheckboxState::Checked);
    }
}
