use contracts::domain::a001_pack::Pack;
use leptos::prelude::*;

/// Packs whose name contains `query`, ignoring case, in source order.
///
/// Plain substring match: no trimming, no tokenization, no minimum length.
/// An empty query keeps every pack.
pub fn derive_filtered_view(packs: &[Pack], query: &str) -> Vec<Pack> {
    if query.is_empty() {
        return packs.to_vec();
    }
    let query = query.to_lowercase();
    packs
        .iter()
        .filter(|pack| pack.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// State owned by the packs list for as long as it is mounted
#[derive(Clone, Debug, Default)]
pub struct PacksListState {
    /// Last query reported by the table
    pub search_query: String,
}

pub fn create_state() -> RwSignal<PacksListState> {
    RwSignal::new(PacksListState::default())
}

/// The search box only makes sense when there is something to search
pub fn is_searchable(packs: &[Pack]) -> bool {
    !packs.is_empty()
}

/// Query in effect for `packs`.
///
/// An empty collection has no search box, so a leftover query must not keep
/// the list in its "no matches" state.
pub fn active_query<'a>(packs: &[Pack], query: &'a str) -> &'a str {
    if is_searchable(packs) {
        query
    } else {
        ""
    }
}

/// Visible packs, recomputed whenever the collection or the query changes
pub fn create_filtered_view(
    packs_list: Signal<Vec<Pack>>,
    state: RwSignal<PacksListState>,
) -> Memo<Vec<Pack>> {
    Memo::new(move |_| {
        state.with(|s| packs_list.with(|packs| derive_filtered_view(packs, &s.search_query)))
    })
}

pub fn create_active_query(
    packs_list: Signal<Vec<Pack>>,
    state: RwSignal<PacksListState>,
) -> Memo<String> {
    Memo::new(move |_| {
        state.with(|s| packs_list.with(|packs| active_query(packs, &s.search_query).to_string()))
    })
}

/// Stores `query`; returns false when it is already the current one
pub fn apply_query_change(state: RwSignal<PacksListState>, query: String) -> bool {
    if state.with_untracked(|s| s.search_query == query) {
        return false;
    }
    state.update(|s| s.search_query = query);
    true
}

/// Drops the query once the collection is empty
pub fn clear_query_if_source_empty(state: RwSignal<PacksListState>, packs: &[Pack]) -> bool {
    if is_searchable(packs) || state.with_untracked(|s| s.search_query.is_empty()) {
        return false;
    }
    state.update(|s| s.search_query.clear());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pack::ui::list::empty_state::PacksEmptyState;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_pack::PackId;
    use leptos::reactive::owner::Owner;

    fn pack(id: u32, name: &str) -> Pack {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Pack::new_for_insert(PackId(id), name.to_string(), String::new(), at)
    }

    fn names(packs: &[Pack]) -> Vec<&str> {
        packs.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_case_insensitive_match_keeps_order() {
        let packs = vec![pack(1, "Pack A"), pack(2, "pack B")];
        assert_eq!(names(&derive_filtered_view(&packs, "pack")), vec!["Pack A", "pack B"]);
        assert_eq!(names(&derive_filtered_view(&packs, "PACK b")), vec!["pack B"]);
    }

    #[test]
    fn test_substring_not_prefix() {
        let packs = vec![pack(1, "osquery_monitoring"), pack(2, "incident-response")];
        assert_eq!(names(&derive_filtered_view(&packs, "monitor")), vec!["osquery_monitoring"]);
        assert_eq!(names(&derive_filtered_view(&packs, "-resp")), vec!["incident-response"]);
    }

    #[test]
    fn test_no_match() {
        let packs = vec![pack(1, "Pack A")];
        assert!(derive_filtered_view(&packs, "zzz").is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let packs = vec![pack(1, "Pack A"), pack(2, "PackB")];
        assert_eq!(names(&derive_filtered_view(&packs, "k ")), vec!["Pack A"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let packs = vec![pack(3, "c"), pack(1, "a"), pack(2, "b")];
        assert_eq!(derive_filtered_view(&packs, ""), packs);
    }

    #[test]
    fn test_empty_collection() {
        assert!(derive_filtered_view(&[], "").is_empty());
        assert!(derive_filtered_view(&[], "pack").is_empty());
        assert!(!is_searchable(&[]));
        assert!(is_searchable(&[pack(1, "Pack A")]));
    }

    #[test]
    fn test_new_collection_gets_current_query() {
        let query = "ta";
        let old = vec![pack(1, "beta"), pack(2, "alpha")];
        assert_eq!(names(&derive_filtered_view(&old, query)), vec!["beta"]);

        let new = vec![pack(6, "zeta"), pack(7, "gamma"), pack(8, "iota")];
        let view = derive_filtered_view(&new, query);
        assert_eq!(names(&view), vec!["zeta", "iota"]);
        assert!(view.iter().all(|p| new.contains(p)));
    }

    #[test]
    fn test_active_query_ignores_leftover_query_on_empty_collection() {
        assert_eq!(active_query(&[], "pack"), "");
        assert_eq!(active_query(&[pack(1, "Pack A")], "pack"), "pack");
    }

    #[test]
    fn test_view_follows_query_and_replaced_collection() {
        let owner = Owner::new();
        owner.with(|| {
            let packs = RwSignal::new(vec![pack(1, "beta"), pack(2, "alpha")]);
            let state = create_state();
            let view = create_filtered_view(packs.into(), state);

            assert_eq!(view.with(|v| v.len()), 2);

            assert!(apply_query_change(state, "ta".to_string()));
            assert_eq!(view.with(|v| names(v).join(",")), "beta");

            let replacement = vec![pack(6, "zeta"), pack(7, "gamma"), pack(8, "iota")];
            packs.set(replacement.clone());
            let shown = view.get();
            assert_eq!(names(&shown), vec!["zeta", "iota"]);
            assert!(shown.iter().all(|p| replacement.contains(p)));

            assert!(apply_query_change(state, String::new()));
            assert_eq!(view.get(), replacement);
        });
    }

    #[test]
    fn test_repeated_query_is_not_stored_again() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state();
            assert!(apply_query_change(state, "pack".to_string()));
            assert!(!apply_query_change(state, "pack".to_string()));
            assert_eq!(state.with_untracked(|s| s.search_query.clone()), "pack");
        });
    }

    #[test]
    fn test_deleting_every_match_while_searching_offers_create_again() {
        let owner = Owner::new();
        owner.with(|| {
            let packs = RwSignal::new(vec![pack(1, "Pack A"), pack(2, "pack B")]);
            let state = create_state();
            let view = create_filtered_view(packs.into(), state);
            let query = create_active_query(packs.into(), state);

            apply_query_change(state, "pack".to_string());
            assert_eq!(view.with(|v| v.len()), 2);
            assert_eq!(query.get(), "pack");

            packs.set(Vec::new());
            assert!(view.with(|v| v.is_empty()));
            assert_eq!(query.get(), "");
            assert!(PacksEmptyState::for_query(&query.get()).has_create_action());

            assert!(clear_query_if_source_empty(state, &packs.get_untracked()));
            assert!(!clear_query_if_source_empty(state, &packs.get_untracked()));

            // A later pack is not hidden by the old search
            packs.set(vec![pack(3, "Compliance")]);
            assert_eq!(names(&view.get()), vec!["Compliance"]);
            assert_eq!(query.get(), "");
        });
    }

    #[test]
    fn test_clearing_query_restores_collection() {
        let packs = vec![pack(1, "Pack A"), pack(2, "Other")];
        assert!(derive_filtered_view(&packs, "zzz").is_empty());
        assert_eq!(derive_filtered_view(&packs, ""), packs);
    }
}
