use crate::domain::a001_pack::store::use_packs_store;
use crate::shared::icons::icon;
use contracts::domain::a001_pack::Pack;
use leptos::prelude::*;
use thaw::*;

/// Modal form that adds a new, empty pack to the store
#[component]
pub fn CreatePackForm(
    on_close: Callback<()>,
    on_created: Callback<Pack>,
) -> impl IntoView {
    let store = use_packs_store();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_save = move |_| {
        set_error.set(None);
        match store.insert(&name.get_untracked(), &description.get_untracked()) {
            Ok(pack) => {
                log::info!("Created pack {} ({})", pack.name, pack.id);
                on_created.run(pack);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New pack"</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Name"</Label>
                        <Input value=name placeholder="Name" />
                    </div>

                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=description placeholder="Add a description of your pack" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                    >
                        "Save"
                    </Button>
                </div>
            </div>
        </div>
    }
}
