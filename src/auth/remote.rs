use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    auth::{AuthError, Authenticator, Credentials, User},
    prelude::*,
};

/// Client of the dashboard backend's `/api/auth` endpoints.
pub struct RemoteAuthenticator {
    client: Client,
    base_url: Url,
}

impl RemoteAuthenticator {
    /// Where the browser goes after a successful sign-in.
    pub const DASHBOARD_ROUTE: &'static str = "/dashboard";

    pub fn try_new(base_url: Url) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url })
    }

    #[instrument(skip_all, fields(action = action, email = %credentials.email))]
    async fn post(&self, action: &str, credentials: &Credentials) -> Result<User> {
        let url = self.endpoint(action)?;
        info!(%url, "submitting…");
        let response = self.client.post(url).json(credentials).send().await?;
        let status = response.status();
        if status.is_success() {
            info!(redirect = Self::DASHBOARD_ROUTE, "accepted");
            return Ok(credentials.user());
        }
        let body = response.bytes().await?;
        let error = AuthError::rejection(status, &body);
        error!(%error, "rejected");
        Err(error.into())
    }

    fn endpoint(&self, action: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("`{}` cannot be a base URL", self.base_url))?
            .pop_if_empty()
            .extend(["api", "auth", action]);
        Ok(url)
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    async fn register(&mut self, credentials: &Credentials) -> Result<User> {
        self.post("register", credentials).await
    }

    async fn login(&mut self, credentials: &Credentials) -> Result<User> {
        self.post("login", credentials).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AuthError {
    const DEFAULT_MESSAGE: &'static str = "An error occurred";

    /// Turn a non-successful response into a rejection, tolerating any body.
    fn rejection(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string());
        Self::Rejected { status, message }
    }
}
