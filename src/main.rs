#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod auth;
mod cli;
mod core;
mod dataset;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => args.run()?,
        Command::Summary(args) => args.run()?,
        Command::Recommend(args) => args.run()?,
        Command::Auth(args) => args.run().await?,
    }

    info!("done!");
    Ok(())
}
