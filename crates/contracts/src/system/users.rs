use crate::enums::UserRole;
use serde::{Deserialize, Serialize};

/// Team membership of a user together with the role held on that team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTeam {
    pub id: u32,
    pub name: String,
    pub role: UserRole,
}

/// Currently authenticated operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub global_role: Option<UserRole>,
    #[serde(default)]
    pub teams: Vec<UserTeam>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team_user() {
        let json = r#"{
            "id": 3,
            "name": "Ana",
            "email": "ana@example.com",
            "global_role": null,
            "teams": [{"id": 1, "name": "Workstations", "role": "observer"}]
        }"#;

        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.global_role, None);
        assert_eq!(user.teams[0].role, UserRole::Observer);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id": 3, "name": "Ana", "email": "a@b.c", "global_role": "owner"}"#;
        assert!(serde_json::from_str::<UserInfo>(json).is_err());
    }
}
