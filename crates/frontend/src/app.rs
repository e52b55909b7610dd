use crate::domain::a001_pack::store::PacksStore;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Pack collection shared by every page that lists or edits packs.
    provide_context(PacksStore::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
