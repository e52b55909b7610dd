pub mod actions;
pub mod empty_state;
pub mod state;
pub mod table_config;

use crate::domain::a001_pack::store::use_packs_store;
use crate::shared::components::table::{QueryChange, TableContainer};
use crate::shared::settings::load_settings_or_default;
use crate::system::auth::context::use_is_only_observer;
use actions::{PackActionHandlers, PackActions};
use contracts::domain::a001_pack::Pack;
use empty_state::NoPacks;
use leptos::prelude::*;
use state::{
    apply_query_change, clear_query_if_source_empty, create_active_query, create_filtered_view, create_state,
    is_searchable,
};
use table_config::{generate_data_set, generate_table_headers, PackRow};

/// Searchable packs table with bulk enable, disable and delete.
///
/// Owns only the search query. The visible packs are recomputed from
/// `packs_list` and the query whenever either changes, so a replaced
/// collection is never shown unfiltered.
#[component]
pub fn PacksListWrapper(
    #[prop(into)] packs_list: Signal<Vec<Pack>>,
    handlers: PackActionHandlers,
) -> impl IntoView {
    let store = use_packs_store();
    let is_only_observer = use_is_only_observer();
    let settings = load_settings_or_default();
    let state = create_state();

    let filtered_packs = create_filtered_view(packs_list, state);
    let search_query = create_active_query(packs_list, state);

    // An emptied collection hides the search box, so its query goes too
    Effect::new(move |_| {
        if packs_list.with(|packs| clear_query_if_source_empty(state, packs)) {
            log::debug!("Packs list is empty, search query cleared");
        }
    });

    let table_headers = Signal::derive(move || generate_table_headers(is_only_observer.get()));
    let table_data: Signal<Vec<PackRow>> =
        Signal::derive(move || filtered_packs.with(|packs| generate_data_set(packs)));
    let searchable = Signal::derive(move || packs_list.with(|packs| is_searchable(packs)));

    let on_query_change = Callback::new(move |query: QueryChange| {
        if apply_query_change(state, query.search_query) {
            log::debug!("Packs search query changed to {:?}", state.with_untracked(|s| s.search_query.clone()));
        }
    });

    on_cleanup(|| log::debug!("Packs list unmounted, search state dropped"));

    let PackActions {
        primary,
        secondary,
        create,
    } = PackActions::new(&handlers);

    view! {
        <div class="packs-list-wrapper">
            <TableContainer
                results_title="packs"
                columns=table_headers
                data=table_data
                is_loading=store.is_loading
                default_sort_header=settings.default_sort_header
                default_sort_direction=settings.default_sort_direction
                search_query=search_query
                on_query_change=on_query_change
                input_placeholder=settings.input_placeholder
                search_debounce_ms=settings.search_debounce_ms
                searchable=searchable
                primary_select_action=primary
                secondary_select_actions=secondary
                empty_component=move || view! { <NoPacks search_query=search_query create_action=create /> }
            />
        </div>
    }
}
