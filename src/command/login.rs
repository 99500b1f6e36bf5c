// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::warn;
use secrecy::SecretString;
use tokio::task;

use crate::{
    auth,
    error::Result,
    route,
    session::SessionView as _,
};

use super::Context;

/// Sign in to the booking platform and resume the page that asked for it.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The email address to sign in with.
    #[arg(long, short, env = "STAYGATE_EMAIL")]
    email: String,

    /// The page to open once signed in. This is the `redirect` query value
    /// the login page was opened with.
    #[arg(long)]
    redirect: Option<String>,
}

#[async_trait(?Send)]
impl super::Command for Command {
    async fn execute(self, context: &mut Context) -> Result<()> {
        let password = task::spawn_blocking(|| {
            rpassword::prompt_password("Password: ").map(SecretString::new)
        })
        .await??;

        auth::login(&context.api, &mut context.store, &self.email, &password).await?;
        if let Some(identity) = context.store.identity() {
            println!(
                "Signed in as {} ({})",
                identity.name,
                context.store.role().unwrap_or("no role")
            );
        }

        let home = route::by_name(route::HOME).map_or("/", |route| route.path);
        let target = self.redirect.as_deref().unwrap_or(home);
        let resumed = context.router.push(&context.store, target).map(|_| ());
        if let Err(e) = resumed {
            warn!("We could not resume {}: {}", target, e);
            _ = context.router.push(&context.store, home)?;
        }
        if let Some(location) = context.router.current() {
            println!("{} ({})", location.full_path(), location.route.name);
        }
        Ok(())
    }
}
