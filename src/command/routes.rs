// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};

use crate::{
    error::Result,
    guard::{self, Decision},
    route::{self, Access},
};

use super::Context;

/// List the pages of the booking client and who may open them.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Only list the pages the current session may open.
    #[arg(long)]
    accessible: bool,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "View")]
    view: &'static str,
    #[tabled(rename = "Access")]
    access: Access,
}

#[async_trait(?Send)]
impl super::Command for Command {
    async fn execute(self, context: &mut Context) -> Result<()> {
        let rows = route::iter()
            .filter(|route| {
                !self.accessible
                    || guard::decide(route, route.path, &context.store) == Decision::Allow
            })
            .map(|route| Row {
                name: route.name,
                path: route.path,
                view: route.view,
                access: route.access,
            });
        println!("{}", Table::new(rows).with(Style::rounded()));
        Ok(())
    }
}
