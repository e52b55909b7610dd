use crate::domain::a001_pack::ui::manage::ManagePacksPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page page--not-found">"Page not found."</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/packs/manage" /> } />
                    <Route path=path!("/packs/manage") view=ManagePacksPage />
                </Routes>
            </main>
        </Router>
    }
}
