// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{auth, error::Result};

use super::Context;

/// Sign out of the booking platform and forget the stored session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait(?Send)]
impl super::Command for Command {
    async fn execute(self, context: &mut Context) -> Result<()> {
        auth::logout(&context.api, &mut context.store).await;
        println!("Signed out");
        Ok(())
    }
}
