// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use crate::{error::Result, session::SessionView as _};

use super::Context;

/// Show who is signed in.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[derive(Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[async_trait(?Send)]
impl super::Command for Command {
    async fn execute(self, context: &mut Context) -> Result<()> {
        let store = &context.store;
        let Some(identity) = store.identity() else {
            println!("Not signed in");
            return Ok(());
        };

        let fields = [
            Field::new("ID", identity.id.as_str()),
            Field::new("Username", identity.username.as_str()),
            Field::new("Name", identity.name.as_str()),
            Field::new("Email", identity.email.as_str()),
            Field::new("Role", store.role().unwrap_or("(none)")),
            Field::new("Token", format!("{} ⋆⋆⋆⋆⋆⋆⋆⋆⋆⋆", identity.token_type)),
            Field::new(
                "Session",
                if store.is_persistent() {
                    "saved on disk"
                } else {
                    "this process only"
                },
            ),
        ];
        println!("{}", Table::new(fields).with(Style::rounded()));
        Ok(())
    }
}
