/// List helpers shared by table views (sorting, match highlighting, search input)
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait for rows that can be sorted by a named field
pub trait Sortable {
    /// Compares two rows by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Highlights case-insensitive matches of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="table__match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping case-insensitive matches.
///
/// Lowercasing can change byte lengths for some scripts; in that case no
/// ranges are reported and the text is shown unhighlighted.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Sorts a list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if direction.is_ascending() { cmp } else { cmp.reverse() }
    });
}

/// Search input that reports its value after a quiet period
#[component]
pub fn SearchInput(
    /// Callback with the settled query
    #[prop(into)]
    on_change: Callback<String>,
    /// Query currently applied by the owner
    #[prop(into)]
    value: Signal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Quiet period before `on_change` fires
    #[prop(optional, default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Follow queries reset by the owner
    Effect::new(move |_| {
        let applied = value.get();
        if input_value.get_untracked() != applied {
            set_input_value.set(applied);
        }
    });

    // Dropping a pending timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field == field {
        if direction.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}
