// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod auth;
mod command;
mod error;
mod guard;
mod metadata;
mod route;
mod router;
mod session;
mod storage;

use std::{process, time::Duration};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use error::Result;
use log::{error, warn};
use url::Url;

#[derive(Debug, Subcommand)]
enum Command {
    Login(command::login::Command),
    Logout(command::logout::Command),
    Whoami(command::whoami::Command),
    Routes(command::routes::Command),
    Navigate(command::navigate::Command),
}

#[async_trait(?Send)]
impl command::Command for Command {
    async fn execute(self, context: &mut command::Context) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.execute(context).await,
            Self::Logout(cmd) => cmd.execute(context).await,
            Self::Whoami(cmd) => cmd.execute(context).await,
            Self::Routes(cmd) => cmd.execute(context).await,
            Self::Navigate(cmd) => cmd.execute(context).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The base URL of the booking platform's REST API.
    #[arg(long, env = "STAYGATE_API_URL", default_value = "http://localhost:8080/api", value_parser = Url::parse)]
    api_url: Url,

    /// How long to wait for the API before giving up, in seconds.
    #[arg(long, env = "STAYGATE_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Keep the session for this invocation only instead of saving it to
    /// disk.
    #[arg(long)]
    no_persist_session: bool,

    #[clap(subcommand)]
    command: Command,
}

fn session_storage(args: &Args) -> Box<dyn storage::Storage> {
    if !args.no_persist_session {
        if let Some(file_storage) = storage::File::new(metadata::SESSION_FILE_NAME) {
            return Box::new(file_storage);
        }
        warn!("We need to fall back to in-memory session storage because there is no data directory to write to");
    }

    Box::new(storage::Memory::new())
}

async fn run(args: Args) -> Result<()> {
    let api = auth::HttpAuthApi::new(args.api_url.clone(), Duration::from_secs(args.timeout_secs))?;
    let mut context = command::Context::new(session_storage(&args), Box::new(api));

    command::Command::execute(args.command, &mut context).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("STAYGATE_LOG", "warn")
        .write_style("STAYGATE_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
