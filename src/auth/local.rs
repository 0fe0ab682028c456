use async_trait::async_trait;

use crate::{
    auth::{AuthError, Authenticator, Credentials, Storage, StoredUser, User},
    prelude::*,
};

/// Single-account authenticator over [`Storage`].
///
/// There is only one `user` record: registering again replaces the previous account.
pub struct LocalAuthenticator<'s, S> {
    storage: &'s mut S,
}

impl<'s, S: Storage> LocalAuthenticator<'s, S> {
    const USER_KEY: &'static str = "user";

    pub const fn new(storage: &'s mut S) -> Self {
        Self { storage }
    }

    fn stored_user(&self) -> Result<Option<StoredUser>> {
        self.storage
            .get(Self::USER_KEY)?
            .map(|value| serde_json::from_str(&value))
            .transpose()
            .context("the stored user is corrupted")
    }
}

#[async_trait]
impl<'s, S: Storage> Authenticator for LocalAuthenticator<'s, S> {
    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn register(&mut self, credentials: &Credentials) -> Result<User> {
        let stored = StoredUser { user: credentials.user(), password: credentials.password.clone() };
        if self.stored_user()?.is_some() {
            warn!("replacing the previously registered account");
        }
        self.storage.set(Self::USER_KEY, serde_json::to_string(&stored)?)?;
        info!("registered");
        Ok(stored.user)
    }

    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&mut self, credentials: &Credentials) -> Result<User> {
        let Some(stored) =
            self.stored_user()?.filter(|stored| stored.user.email == credentials.email)
        else {
            bail!(AuthError::NotFound { email: credentials.email.clone() });
        };
        ensure!(stored.password == credentials.password, AuthError::WrongCredential);
        info!("logged in");
        Ok(stored.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStorage;

    fn jane() -> Credentials {
        Credentials::builder()
            .username("jane")
            .email("jane@example.com")
            .password("secret")
            .build()
    }

    #[tokio::test]
    async fn test_register_then_login() -> Result {
        let mut storage = MemoryStorage::default();
        let mut authenticator = LocalAuthenticator::new(&mut storage);
        authenticator.register(&jane()).await?;

        let credentials =
            Credentials::builder().email("jane@example.com").password("secret").build();
        let user = authenticator.login(&credentials).await?;
        assert_eq!(user.username, "jane");
        Ok(())
    }

    #[tokio::test]
    async fn test_login_without_account() {
        let mut storage = MemoryStorage::default();
        let error = LocalAuthenticator::new(&mut storage).login(&jane()).await.unwrap_err();
        assert_eq!(
            error.downcast_ref::<AuthError>(),
            Some(&AuthError::NotFound { email: "jane@example.com".into() })
        );
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() -> Result {
        let mut storage = MemoryStorage::default();
        let mut authenticator = LocalAuthenticator::new(&mut storage);
        authenticator.register(&jane()).await?;

        let credentials = Credentials { password: "guess".into(), ..jane() };
        let error = authenticator.login(&credentials).await.unwrap_err();
        assert_eq!(error.downcast_ref::<AuthError>(), Some(&AuthError::WrongCredential));
        Ok(())
    }

    #[tokio::test]
    async fn test_second_registration_overwrites_first() -> Result {
        let mut storage = MemoryStorage::default();
        let mut authenticator = LocalAuthenticator::new(&mut storage);
        authenticator.register(&jane()).await?;
        let john = Credentials::builder()
            .username("john")
            .email("john@example.com")
            .password("hunter2")
            .build();
        authenticator.register(&john).await?;

        let error = authenticator.login(&jane()).await.unwrap_err();
        assert!(matches!(error.downcast_ref::<AuthError>(), Some(AuthError::NotFound { .. })));
        assert_eq!(authenticator.login(&john).await?.email, "john@example.com");
        Ok(())
    }
}
