use serde::{Deserialize, Serialize};

/// What the user types into the login or registration form.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize, bon::Builder)]
pub struct Credentials {
    /// Only asked for on registration.
    #[builder(into)]
    pub username: Option<String>,

    #[builder(into)]
    pub email: String,

    #[builder(into)]
    pub password: String,
}

impl Credentials {
    /// The identity these credentials claim, before they are checked.
    pub fn user(&self) -> User {
        User {
            username: self.username.clone().unwrap_or_else(|| self.email.clone()),
            email: self.email.clone(),
        }
    }
}

/// Signed-in identity.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// The one account known to the local authenticator.
///
/// The password is kept as typed.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    pub user: User,

    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_login_body() {
        let credentials =
            Credentials::builder().email("jane@example.com").password("secret").build();
        assert_eq!(
            serde_json::to_string(&credentials).unwrap(),
            r#"{"username":null,"email":"jane@example.com","password":"secret"}"#
        );
    }

    #[test]
    fn test_user_falls_back_to_email() {
        let credentials = Credentials::builder().email("jane@example.com").password("x").build();
        assert_eq!(credentials.user().username, "jane@example.com");
    }

    #[test]
    fn test_stored_user_is_flat() {
        let stored = StoredUser {
            user: User { username: "jane".into(), email: "jane@example.com".into() },
            password: "secret".into(),
        };
        assert_eq!(
            serde_json::to_string(&stored).unwrap(),
            r#"{"username":"jane","email":"jane@example.com","password":"secret"}"#
        );
    }
}
