use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::{
    auth::{
        Authenticator,
        Credentials,
        FileStorage,
        LocalAuthenticator,
        RemoteAuthenticator,
        Session,
        User,
    },
    prelude::*,
    tables::build_user_table,
};

#[derive(Parser)]
pub struct AuthArgs {
    /// Local storage file holding the registered account and the session.
    #[clap(long = "store", env = "AUTH_STORE_PATH", default_value = "powerplan-auth.json")]
    store: PathBuf,

    /// Dashboard backend to authenticate against instead of the local account,
    /// for example: `http://localhost:3000`.
    #[clap(long = "api-url", env = "AUTH_API_URL")]
    api_url: Option<Url>,

    #[command(subcommand)]
    command: AuthCommand,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in.
    Register {
        #[clap(long)]
        username: String,

        #[clap(flatten)]
        login: LoginArgs,
    },

    /// Sign in.
    Login(LoginArgs),

    /// Forget the session.
    Logout,

    /// Show the signed-in user.
    Whoami,
}

#[derive(Parser)]
pub struct LoginArgs {
    #[clap(long)]
    email: String,

    #[clap(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    password: String,
}

impl AuthArgs {
    pub async fn run(self) -> Result {
        let mut storage = FileStorage::open(&self.store)?;
        let mut session = Session::restore(&storage)?;

        let user = match self.command {
            AuthCommand::Register { username, login } => {
                let credentials = Credentials::builder()
                    .username(username)
                    .email(login.email)
                    .password(login.password)
                    .build();
                Self::authenticate(self.api_url, &mut storage, &credentials, true).await?
            }
            AuthCommand::Login(login) => {
                let credentials =
                    Credentials::builder().email(login.email).password(login.password).build();
                Self::authenticate(self.api_url, &mut storage, &credentials, false).await?
            }
            AuthCommand::Logout => {
                if !session.is_signed_in() {
                    warn!("not signed in");
                }
                session.sign_out(&mut storage)?;
                return Ok(());
            }
            AuthCommand::Whoami => {
                match session.user() {
                    Some(user) => println!("{}", build_user_table(user)),
                    None => warn!("not signed in"),
                }
                return Ok(());
            }
        };

        println!("{}", build_user_table(&user));
        session.sign_in(user, &mut storage)
    }

    async fn authenticate(
        api_url: Option<Url>,
        storage: &mut FileStorage,
        credentials: &Credentials,
        is_registration: bool,
    ) -> Result<User> {
        let mut authenticator: Box<dyn Authenticator + '_> = match api_url {
            Some(api_url) => Box::new(RemoteAuthenticator::try_new(api_url)?),
            None => Box::new(LocalAuthenticator::new(storage)),
        };
        if is_registration {
            authenticator.register(credentials).await
        } else {
            authenticator.login(credentials).await
        }
    }
}
