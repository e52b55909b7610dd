use crate::shared::components::table::ActionButton;
use leptos::prelude::*;

use super::actions::CreateAction;

/// What the packs table shows when it has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacksEmptyState {
    /// Nothing to list: invite the user to create a pack
    NoPacks,
    /// A search is active and hides everything
    NoMatches,
}

impl PacksEmptyState {
    /// Depends only on whether a search is active, not on why the list is empty
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            PacksEmptyState::NoPacks
        } else {
            PacksEmptyState::NoMatches
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            PacksEmptyState::NoPacks => "You don't have any packs",
            PacksEmptyState::NoMatches => "No packs match the current search criteria.",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            PacksEmptyState::NoPacks => {
                "Query packs allow you to schedule recurring queries for your hosts."
            }
            PacksEmptyState::NoMatches => {
                "Expecting to see packs? Try again in a few seconds as the system catches up."
            }
        }
    }

    pub fn has_create_action(&self) -> bool {
        matches!(self, PacksEmptyState::NoPacks)
    }
}

#[component]
pub fn NoPacks(
    #[prop(into)] search_query: Signal<String>,
    create_action: CreateAction,
) -> impl IntoView {
    let state = Memo::new(move |_| search_query.with(|q| PacksEmptyState::for_query(q)));

    view! {
        <div class="no-packs">
            <div class="no-packs__inner">
                <div class="no-packs__inner-text">
                    <h2>{move || state.get().heading()}</h2>
                    <p>{move || state.get().body()}</p>
                    <Show when=move || state.get().has_create_action()>
                        <ActionButton
                            label=create_action.label
                            icon_name=create_action.icon
                            variant=create_action.variant
                            class="packs-list-wrapper__create-button"
                            on_click=create_action.on_click
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
