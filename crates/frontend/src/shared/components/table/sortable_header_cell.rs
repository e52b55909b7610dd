//! Sortable table header cell
//!
//! # Example
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Queries"
//!     sort_field="query_count"
//!     current_sort_field=Signal::derive(move || sort.with(|s| s.0.clone()))
//!     direction=Signal::derive(move || sort.with(|s| s.1))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    direction: Signal<SortDirection>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || current_sort_field.with(|f| get_sort_class(f, &sort_field_for_class))>
                    {move || {
                        current_sort_field.with(|f| get_sort_indicator(f, &sort_field_for_indicator, direction.get()))
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
