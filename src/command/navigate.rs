// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, route};

use super::Context;

/// Open a page the way the browser client would and print where it lands.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to open, optionally with a query (for example
    /// `/booking?page=2`).
    #[clap()]
    target: String,
}

#[async_trait(?Send)]
impl super::Command for Command {
    async fn execute(self, context: &mut Context) -> Result<()> {
        let location = context.router.push(&context.store, &self.target)?;
        println!("{} ({})", location.full_path(), location.route.name);
        if location.route.name == route::LOGIN {
            if let Some(redirect) = location.query_value("redirect") {
                eprintln!("Sign in with `login --redirect {redirect}` to continue there.");
            }
        }
        Ok(())
    }
}
