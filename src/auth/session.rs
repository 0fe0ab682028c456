use crate::{
    auth::{Storage, User},
    prelude::*,
};

/// Who is signed in, if anybody.
///
/// Restored from storage once and then passed around explicitly.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    const KEY: &'static str = "session";

    pub fn restore(storage: &impl Storage) -> Result<Self> {
        let user = storage
            .get(Self::KEY)?
            .map(|value| serde_json::from_str(&value))
            .transpose()
            .context("the stored session is corrupted")?;
        Ok(Self { user })
    }

    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[instrument(skip_all, fields(email = %user.email))]
    pub fn sign_in(&mut self, user: User, storage: &mut impl Storage) -> Result {
        storage.set(Self::KEY, serde_json::to_string(&user)?)?;
        info!("signed in");
        self.user = Some(user);
        Ok(())
    }

    #[instrument(skip_all)]
    pub fn sign_out(&mut self, storage: &mut impl Storage) -> Result {
        storage.remove(Self::KEY)?;
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "signed out");
        }
        Ok(())
    }
}
