//! Mock sign-in: a single locally stored account, or the dashboard's remote auth endpoints.

mod credentials;
mod error;
mod local;
mod remote;
mod session;
mod storage;

use async_trait::async_trait;

pub use self::{
    credentials::{Credentials, StoredUser, User},
    error::AuthError,
    local::LocalAuthenticator,
    remote::RemoteAuthenticator,
    session::Session,
    storage::{FileStorage, Storage},
};
#[cfg(test)]
pub use self::storage::MemoryStorage;
use crate::prelude::*;

#[async_trait]
pub trait Authenticator: Send {
    /// Create the account and return the signed-in user.
    async fn register(&mut self, credentials: &Credentials) -> Result<User>;

    /// Check the credentials and return the signed-in user.
    ///
    /// Failed checks are reported as [`AuthError`] inside the returned error.
    async fn login(&mut self, credentials: &Credentials) -> Result<User>;
}
