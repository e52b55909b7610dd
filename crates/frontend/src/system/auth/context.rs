use contracts::system::permissions;
use contracts::system::users::UserInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the cached session user on mount
    Effect::new(move |_| {
        if let Some(user_info) = storage::get_current_user() {
            log::debug!("Restored session for user {}", user_info.id);
            set_auth_state.set(AuthState {
                user_info: Some(user_info),
            });
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive "only observer" flag of the current user.
///
/// No known user means no mutating affordances, so it reads as restricted.
/// See `storage` for the localStorage entry that signs a user in.
pub fn use_is_only_observer() -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(permissions::is_only_observer)
                .unwrap_or(true)
        })
    })
}
