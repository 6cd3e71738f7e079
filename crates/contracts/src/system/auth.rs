use serde::{Deserialize, Serialize};

/// The signed-in operator, as persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_user_round_trips_through_json() {
        let user = SessionUser {
            username: "admin".to_string(),
            name: "Administrator".to_string(),
            role: UserRole::Admin,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(back.is_admin());
    }
}
