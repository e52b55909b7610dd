use super::details::CreatePackForm;
use super::list::actions::PackActionHandlers;
use super::list::PacksListWrapper;
use crate::domain::a001_pack::store::use_packs_store;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::use_is_only_observer;
use contracts::domain::a001_pack::PackId;
use leptos::prelude::*;
use thaw::*;

/// Header create button: any non-observer, whatever the list currently shows
pub fn shows_header_create(is_only_observer: bool) -> bool {
    !is_only_observer
}

/// Packs page: header, packs table and the create form
#[component]
pub fn ManagePacksPage() -> impl IntoView {
    let store = use_packs_store();
    let is_only_observer = use_is_only_observer();
    let (show_create_form, set_show_create_form) = signal(false);

    let handlers = PackActionHandlers {
        on_remove: Callback::new(move |ids: Vec<PackId>| {
            let removed = store.remove(&ids);
            log::info!("Deleted {} of {} selected packs", removed, ids.len());
        }),
        on_enable: Callback::new(move |ids: Vec<PackId>| {
            let changed = store.set_disabled(&ids, false);
            log::info!("Enabled {} of {} selected packs", changed, ids.len());
        }),
        on_disable: Callback::new(move |ids: Vec<PackId>| {
            let changed = store.set_disabled(&ids, true);
            log::info!("Disabled {} of {} selected packs", changed, ids.len());
        }),
        on_create: Callback::new(move |_| set_show_create_form.set(true)),
    };

    view! {
        <div class="manage-packs-page">
            <PageHeader
                title="Packs"
                description="Manage query packs to schedule recurring queries for your hosts."
            >
                <Show when=move || shows_header_create(is_only_observer.get())>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handlers.on_create.run(())
                    >
                        {icon("plus")}
                        " Create new pack"
                    </Button>
                </Show>
            </PageHeader>

            <PacksListWrapper packs_list=store.packs handlers=handlers />

            <Show when=move || show_create_form.get()>
                <CreatePackForm
                    on_close=Callback::new(move |_| set_show_create_form.set(false))
                    on_created=Callback::new(move |_| set_show_create_form.set(false))
                />
            </Show>
        </div>
    }
}
