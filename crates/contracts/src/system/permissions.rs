//! Role checks used to decide which affordances a user gets.

use super::users::UserInfo;

pub fn is_global_observer(user: &UserInfo) -> bool {
    user.global_role.map(|r| r.is_observer()).unwrap_or(false)
}

/// True when the user holds a non-observer role on at least one team
pub fn is_any_team_maintainer_or_admin(user: &UserInfo) -> bool {
    user.teams.iter().any(|t| !t.role.is_observer())
}

/// True when every role the user holds is an observer role.
///
/// A global observer is only-observer. A user without a global role is
/// only-observer when they belong to at least one team and observe on all
/// of them. A user with no roles at all is not treated as an observer.
pub fn is_only_observer(user: &UserInfo) -> bool {
    if user.global_role.is_some() {
        return is_global_observer(user);
    }
    !user.teams.is_empty() && !is_any_team_maintainer_or_admin(user)
}
