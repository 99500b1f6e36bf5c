// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    cell::RefCell,
    io::{self, Write},
};

use async_trait::async_trait;
use log::{debug, warn};

use crate::{
    auth::AuthApi,
    error::Result,
    route::Route,
    router::{Notify, Router},
    session::SessionStore,
    storage::Storage,
};

pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod navigate;
pub(crate) mod routes;
pub(crate) mod whoami;

/// Everything a command may touch while it runs.
pub(crate) struct Context {
    pub(crate) store: SessionStore<Box<dyn Storage>>,
    pub(crate) api: Box<dyn AuthApi>,
    pub(crate) router: Router<Alert>,
}

impl Context {
    pub(crate) fn new(storage: Box<dyn Storage>, api: Box<dyn AuthApi>) -> Self {
        Self {
            store: SessionStore::new(storage),
            api,
            router: Router::new(Alert::default()),
        }
    }
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute(self, context: &mut Context) -> Result<()>;
}

const ACCESS_DENIED: &str = "You do not have permission to access this page.";

/// Reports refused navigations on the terminal.
pub(crate) struct Alert<W: Write = io::Stderr> {
    out: RefCell<W>,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            out: RefCell::new(io::stderr()),
        }
    }
}

impl<W: Write> Notify for Alert<W> {
    fn access_denied(&self, route: &Route) {
        debug!("{} is open to {}", route.path, route.access);
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", ACCESS_DENIED) {
            warn!("We could not report a refused navigation: {}", e);
        }
    }
}
