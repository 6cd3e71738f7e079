//! Mock credential check, standing in for a real identity provider.
//!
//! The account table is fixed and the async entry point simulates network
//! latency so the login form exercises its loading state.

use contracts::system::auth::{SessionUser, UserRole};
use gloo_timers::future::TimeoutFuture;

const LOGIN_LATENCY_MS: u32 = 500;

struct MockAccount {
    username: &'static str,
    password: &'static str,
    name: &'static str,
    role: UserRole,
}

const MOCK_ACCOUNTS: &[MockAccount] = &[
    MockAccount {
        username: "admin",
        password: "admin123",
        name: "Administrator",
        role: UserRole::Admin,
    },
    MockAccount {
        username: "user",
        password: "user123",
        name: "Regular User",
        role: UserRole::User,
    },
];

fn check_credentials(username: &str, password: &str) -> Result<SessionUser, String> {
    MOCK_ACCOUNTS
        .iter()
        .find(|a| a.username == username && a.password == password)
        .map(|a| SessionUser {
            username: a.username.to_string(),
            name: a.name.to_string(),
            role: a.role,
        })
        .ok_or_else(|| "Invalid username or password".to_string())
}

/// Validate credentials against the mock account table
pub async fn login(username: String, password: String) -> Result<SessionUser, String> {
    TimeoutFuture::new(LOGIN_LATENCY_MS).await;
    check_credentials(&username, &password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_accounts() {
        let admin = check_credentials("admin", "admin123").unwrap();
        assert_eq!(admin.name, "Administrator");
        assert!(admin.is_admin());

        let user = check_credentials("user", "user123").unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn rejects_bad_password_and_unknown_user() {
        assert!(check_credentials("admin", "wrong").is_err());
        assert!(check_credentials("nobody", "admin123").is_err());
    }
}
