//! Cached session user.
//!
//! There is no login flow in this app. The signed-in user is whatever JSON is
//! stored under `auth_current_user` in localStorage, for example:
//!
//! ```text
//! localStorage.setItem("auth_current_user", JSON.stringify({
//!     "id": 1, "name": "Admin", "email": "admin@example.com",
//!     "global_role": "admin", "teams": []
//! }))
//! ```
//!
//! Without that entry the user is unknown and the packs list stays read-only.

use contracts::system::users::UserInfo;
use web_sys::window;

pub const CURRENT_USER_KEY: &str = "auth_current_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn parse_current_user(json: &str) -> Result<UserInfo, serde_json::Error> {
    serde_json::from_str(json)
}

/// Get the cached current user from localStorage
pub fn get_current_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(CURRENT_USER_KEY).ok()??;
    match parse_current_user(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            // Stale shape or an unknown role code; treat as signed out.
            log::warn!("Ignoring cached user: {}", e);
            None
        }
    }
}
