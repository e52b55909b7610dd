//! Row checkbox for selecting a single row

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;
use thaw::*;

#[component]
pub fn TableCellCheckbox<K>(
    /// Key of the row
    item_key: K,

    /// Selected keys
    #[prop(into)]
    selected: Signal<HashSet<K>>,

    /// Callback with (key, checked)
    on_change: Callback<(K, bool)>,
) -> impl IntoView
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    let key_for_checked = item_key.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&key_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_key.clone(), checked));
                }
            />
        </TableCell>
    }
}
