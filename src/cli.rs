mod auth;
mod dataset;
mod plan;
mod recommend;
mod summary;

use clap::{Parser, Subcommand};

pub use self::{
    auth::AuthArgs,
    plan::PlanArgs,
    recommend::RecommendArgs,
    summary::SummaryArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: suggest when to run the household tasks.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Print the day totals.
    #[clap(name = "summary")]
    Summary(SummaryArgs),

    /// Suggest one ideal time per task from the solar surplus.
    #[clap(name = "recommend")]
    Recommend(RecommendArgs),

    /// Register, sign in or out.
    #[clap(name = "auth")]
    Auth(Box<AuthArgs>),
}
