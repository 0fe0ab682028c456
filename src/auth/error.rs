use http::StatusCode;

/// Reasons a sign-in attempt is turned down.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AuthError {
    #[display("no account is registered under `{email}`")]
    NotFound { email: String },

    #[display("wrong password")]
    WrongCredential,

    #[display("{message} (HTTP {status})")]
    Rejected { status: StatusCode, message: String },
}
