use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user role: {0}")]
pub struct UnknownRoleError(pub String);

/// Roles a user can hold globally or on a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Maintainer,
    Observer,
    ObserverPlus,
}

impl UserRole {
    /// Wire code of the role
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Maintainer => "maintainer",
            UserRole::Observer => "observer",
            UserRole::ObserverPlus => "observer_plus",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Maintainer,
            UserRole::Observer,
            UserRole::ObserverPlus,
        ]
    }

    /// Observer and observer+ may look but not change anything
    pub fn is_observer(&self) -> bool {
        matches!(self, UserRole::Observer | UserRole::ObserverPlus)
    }
}

impl FromStr for UserRole {
    type Err = UnknownRoleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        UserRole::all()
            .into_iter()
            .find(|role| role.code() == code)
            .ok_or_else(|| UnknownRoleError(code.to_string()))
    }
}

impl TryFrom<String> for UserRole {
    type Error = UnknownRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
