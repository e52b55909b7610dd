//! Generic list table: search box, sortable headers, row selection and a
//! bulk-action bar.
//!
//! The container never filters rows itself. It reports search and sort changes
//! through `on_query_change` and renders whatever `data` it is given, sorted by
//! the active header.

use super::action_button::{ActionButton, SelectAction};
use super::columns::{CellKind, CellValue, ColumnDescriptor, TableRecord};
use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::date_utils::{format_datetime, format_relative};
use crate::shared::list_utils::{highlight_matches, sort_list, SearchInput, SortDirection};
use chrono::Utc;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Search and sort state reported to the owner of the table
#[derive(Debug, Clone, PartialEq)]
pub struct QueryChange {
    pub search_query: String,
    pub sort_header: String,
    pub sort_direction: SortDirection,
}

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

impl BodyState {
    pub fn new(is_loading: bool, row_count: usize) -> Self {
        if is_loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }
}

/// The bulk-action bar needs a selection column and at least one selected row
pub fn shows_action_bar(has_selection_column: bool, selected_count: usize) -> bool {
    has_selection_column && selected_count != 0
}

/// Keys of `rows` that are selected, in row order
pub fn selected_in_order<T: TableRecord>(rows: &[T], selected: &HashSet<T::Key>) -> Vec<T::Key> {
    rows.iter()
        .map(|r| r.record_key())
        .filter(|k| selected.contains(k))
        .collect()
}

#[component]
pub fn TableContainer<T, K>(
    #[prop(into)] columns: Signal<Vec<ColumnDescriptor>>,
    #[prop(into)] data: Signal<Vec<T>>,
    #[prop(into)] is_loading: Signal<bool>,
    /// Plural noun for the results counter, e.g. "packs"
    #[prop(into)]
    results_title: String,
    #[prop(into)] default_sort_header: String,
    default_sort_direction: SortDirection,
    /// Current search query of the owner, shown in the search box
    #[prop(into)]
    search_query: Signal<String>,
    /// Whether the search box is shown
    #[prop(into)]
    searchable: Signal<bool>,
    on_query_change: Callback<QueryChange>,
    #[prop(optional, into)] input_placeholder: String,
    #[prop(optional, default = 300)] search_debounce_ms: u32,
    #[prop(optional)] primary_select_action: Option<SelectAction<K>>,
    #[prop(optional)] secondary_select_actions: Vec<SelectAction<K>>,
    /// Rendered instead of the table body when there are no rows
    #[prop(into)]
    empty_component: ViewFn,
) -> impl IntoView
where
    T: TableRecord<Key = K>,
    K: Clone + Eq + std::hash::Hash + Send + Sync + 'static,
{
    let sort_header = RwSignal::new(default_sort_header);
    let sort_direction = RwSignal::new(default_sort_direction);
    let selected: RwSignal<HashSet<K>> = RwSignal::new(HashSet::new());

    let emit_query = move |search_query: String| {
        on_query_change.run(QueryChange {
            search_query,
            sort_header: sort_header.get_untracked(),
            sort_direction: sort_direction.get_untracked(),
        });
    };

    let rows = Memo::new(move |_| {
        let mut rows = data.get();
        let field = sort_header.get();
        let sortable = columns.with(|cols| cols.iter().any(|c| c.id == field && c.sortable));
        if sortable {
            sort_list(&mut rows, &field, sort_direction.get());
        }
        rows
    });

    // Rows that left the data set cannot stay selected
    Effect::new(move |_| {
        let keys: HashSet<K> = rows.with(|r| r.iter().map(|row| row.record_key()).collect());
        selected.update(|s| s.retain(|k| keys.contains(k)));
    });

    let has_selection_column =
        Signal::derive(move || columns.with(|cols| cols.iter().any(|c| c.kind == CellKind::Selection)));
    let row_keys = Signal::derive(move || rows.with(|r| r.iter().map(|row| row.record_key()).collect::<Vec<_>>()));
    let selected_signal = Signal::derive(move || selected.get());
    let selected_count = Signal::derive(move || selected.with(|s| s.len()));
    let body_state = Memo::new(move |_| BodyState::new(is_loading.get(), rows.with(|r| r.len())));

    let toggle_all = move |check_all: bool| {
        if check_all {
            selected.set(row_keys.get_untracked().into_iter().collect());
        } else {
            selected.set(HashSet::new());
        }
    };

    let toggle_selection = move |(key, checked): (K, bool)| {
        selected.update(|s| {
            if checked {
                s.insert(key);
            } else {
                s.remove(&key);
            }
        });
    };

    let toggle_sort = move |field: String| {
        if sort_header.get_untracked() == field {
            sort_direction.update(|d| *d = d.toggled());
        } else {
            sort_header.set(field);
            sort_direction.set(SortDirection::Asc);
        }
        emit_query(search_query.get_untracked());
    };

    let on_search = move |query: String| emit_query(query);

    let run_action = move |action: Callback<Vec<K>>| {
        let keys = rows.with_untracked(|r| selected.with_untracked(|s| selected_in_order(r, s)));
        selected.set(HashSet::new());
        action.run(keys);
    };

    let actions = StoredValue::new(
        secondary_select_actions
            .into_iter()
            .chain(primary_select_action)
            .collect::<Vec<_>>(),
    );

    let action_buttons = move || {
        actions.with_value(|list| {
            list.iter()
                .map(|action| {
                    let on_click = action.on_click;
                    view! {
                        <ActionButton
                            label=action.label
                            icon_name=action.icon
                            variant=action.variant
                            class=format!("table-container__action table-container__action--{}", action.name)
                            on_click=Callback::new(move |_| run_action(on_click))
                        />
                    }
                })
                .collect_view()
        })
    };

    let header_row = move || {
        columns
            .get()
            .into_iter()
            .map(|column| match column.kind {
                CellKind::Selection => view! {
                    <TableHeaderCheckbox
                        keys=row_keys
                        selected=selected_signal
                        on_change=Callback::new(toggle_all)
                    />
                }
                .into_any(),
                _ if column.sortable => view! {
                    <SortableHeaderCell
                        label=column.title
                        sort_field=column.id
                        current_sort_field=sort_header
                        direction=sort_direction
                        on_sort=Callback::new(toggle_sort)
                        min_width=column.min_width
                    />
                }
                .into_any(),
                _ => view! {
                    <TableHeaderCell resizable=false min_width=column.min_width>
                        {column.title}
                    </TableHeaderCell>
                }
                .into_any(),
            })
            .collect_view()
    };

    let render_cell = move |column: &ColumnDescriptor, row: &T| -> AnyView {
        match column.kind {
            CellKind::Selection => view! {
                <TableCellCheckbox
                    item_key=row.record_key()
                    selected=selected_signal
                    on_change=Callback::new(toggle_selection)
                />
            }
            .into_any(),
            kind => {
                let content = match (kind, row.cell_value(column.id)) {
                    (CellKind::Link, CellValue::Text(text)) => view! {
                        <span class="table__link">
                            {move || search_query.with(|q| highlight_matches(&text, q))}
                        </span>
                    }
                    .into_any(),
                    (_, CellValue::Status { label, active }) => {
                        let color = if active { BadgeColor::Success } else { BadgeColor::Informative };
                        view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }.into_any()
                    }
                    (_, CellValue::Timestamp(at)) => view! {
                        <span title=format_datetime(&at)>{format_relative(&at, &Utc::now())}</span>
                    }
                    .into_any(),
                    (_, CellValue::Number(n)) => view! { <span>{n.to_string()}</span> }.into_any(),
                    (_, CellValue::Text(text)) => view! { <span>{text}</span> }.into_any(),
                    (_, CellValue::Empty) => view! { <span>"-"</span> }.into_any(),
                };
                view! {
                    <TableCell>
                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                    </TableCell>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="table-container">
            <div class="table-container__header">
                <span class="table-container__results">
                    {move || format!("{} {}", rows.with(|r| r.len()), results_title)}
                </span>
                <Show when=move || searchable.get()>
                    <SearchInput
                        on_change=Callback::new(on_search)
                        value=search_query
                        placeholder=input_placeholder.clone()
                        debounce_ms=search_debounce_ms
                    />
                </Show>
            </div>

            <Show when=move || shows_action_bar(has_selection_column.get(), selected_count.get())>
                <div class="table-container__action-bar">
                    <span class="table-container__selected-count">
                        {move || format!("{} selected", selected_count.get())}
                    </span>
                    {action_buttons}
                </div>
            </Show>

            {move || match body_state.get() {
                BodyState::Loading => view! {
                    <div class="table-container__loading">
                        <Spinner />
                    </div>
                }
                .into_any(),
                BodyState::Empty => empty_component.run(),
                BodyState::Rows => view! {
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>{header_row}</TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row| row.record_key()
                                children=move |row| {
                                    let cells = move || {
                                        columns.with(|cols| {
                                            cols.iter().map(|column| render_cell(column, &row)).collect_view()
                                        })
                                    };
                                    view! { <TableRow>{cells}</TableRow> }
                                }
                            />
                        </TableBody>
                    </Table>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::Sortable;
    use leptos::reactive::owner::Owner;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    impl TableRecord for Row {
        type Key = u32;

        fn record_key(&self) -> u32 {
            self.0
        }

        fn cell_value(&self, _column_id: &str) -> CellValue {
            CellValue::Number(self.0 as u64)
        }
    }

    #[test]
    fn test_body_state() {
        assert_eq!(BodyState::new(true, 3), BodyState::Loading);
        assert_eq!(BodyState::new(false, 0), BodyState::Empty);
        assert_eq!(BodyState::new(false, 3), BodyState::Rows);
    }

    #[test]
    fn test_body_state_memo_ignores_row_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let data = RwSignal::new(vec![Row(1)]);
            let body = Memo::new(move |_| BodyState::new(false, data.with(|d| d.len())));
            assert_eq!(body.get(), BodyState::Rows);
            data.set(vec![Row(1), Row(2)]);
            assert_eq!(body.get(), BodyState::Rows);
            data.set(Vec::new());
            assert_eq!(body.get(), BodyState::Empty);
        });
    }

    #[test]
    fn test_action_bar_needs_selection_column_and_selected_rows() {
        assert!(shows_action_bar(true, 2));
        assert!(!shows_action_bar(true, 0));
        assert!(!shows_action_bar(false, 2));
    }

    #[test]
    fn test_selected_in_order_follows_rows() {
        let rows = vec![Row(3), Row(1), Row(2)];
        let selected = HashSet::from([2, 3, 42]);
        assert_eq!(selected_in_order(&rows, &selected), vec![3, 2]);
    }
}
