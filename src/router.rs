// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::debug;
use once_cell::sync::Lazy;
use url::{form_urlencoded, Url};

use crate::{
    error::{Navigation, Result},
    guard::{self, Decision, Redirect},
    route::{self, Route},
    session::SessionView,
};

const MAX_REDIRECTS: usize = 10;

// LINT: A constant, known-good URL.
#[allow(clippy::expect_used)]
static BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://staygate.invalid/").expect("base URL is valid"));

/// A requested navigation target: a path plus its query, both decoded and as
/// written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Intent {
    path: String,
    query: Vec<(String, String)>,
    raw_query: Option<String>,
}

impl Intent {
    pub(crate) fn parse(target: &str) -> Result<Self> {
        let url = BASE
            .join(target)
            .map_err(|source| Navigation::InvalidTarget {
                target: target.to_owned(),
                source,
            })?;
        if url.origin() != BASE.origin() {
            return Err(Navigation::NoMatch(target.to_owned()).into());
        }

        Ok(Self {
            path: url.path().to_owned(),
            query: url.query_pairs().into_owned().collect(),
            raw_query: url.query().map(str::to_owned),
        })
    }
}

/// A resolved place in the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) route: &'static Route,
    pub(crate) path: String,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
    /// The query exactly as requested. Absent for locations the router built.
    raw_query: Option<String>,
}

impl Location {
    fn resolve(intent: Intent, target: &str) -> Result<Self> {
        let matched =
            route::resolve(&intent.path).ok_or_else(|| Navigation::NoMatch(target.to_owned()))?;
        Ok(Self {
            route: matched.route,
            path: intent.path,
            params: matched.params,
            query: intent.query,
            raw_query: intent.raw_query,
        })
    }

    fn redirect(redirect: Redirect) -> Result<Self> {
        let (route, path) = route::by_name(redirect.route)
            .and_then(|route| route.href(&[]).map(|path| (route, path)))
            .ok_or_else(|| Navigation::NoMatch(redirect.route.to_owned()))?;
        Ok(Self {
            route,
            path,
            params: vec![],
            query: redirect.query,
            raw_query: None,
        })
    }

    pub(crate) fn full_path(&self) -> String {
        if let Some(raw) = &self.raw_query {
            format!("{}?{}", self.path, raw)
        } else if self.query.is_empty() {
            self.path.clone()
        } else {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            format!("{}?{}", self.path, query)
        }
    }

    pub(crate) fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Tells the user a route was refused because of their role.
pub(crate) trait Notify {
    fn access_denied(&self, route: &Route);
}

impl<T: Notify + ?Sized> Notify for Box<T> {
    fn access_denied(&self, route: &Route) {
        (**self).access_denied(route);
    }
}

/// Runs every navigation through the guard and remembers where it landed.
pub(crate) struct Router<N: Notify> {
    notify: N,
    current: Option<Location>,
}

impl<N: Notify> Router<N> {
    pub(crate) const fn new(notify: N) -> Self {
        Self {
            notify,
            current: None,
        }
    }

    pub(crate) const fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    /// Navigates to `target`, following whatever redirects the guard asks
    /// for, and returns the final location.
    pub(crate) fn push(&mut self, session: &impl SessionView, target: &str) -> Result<&Location> {
        let mut location = Location::resolve(Intent::parse(target)?, target)?;

        for _ in 0..MAX_REDIRECTS {
            let decision = guard::decide(location.route, &location.full_path(), session);
            if decision == Decision::Forbidden {
                self.notify.access_denied(location.route);
            }

            match decision.redirect_target() {
                Some(redirect) => {
                    debug!(
                        "Redirecting {} to {}",
                        location.full_path(),
                        redirect.route
                    );
                    location = Location::redirect(redirect)?;
                }
                None => {
                    debug!("Navigated to {}", location.full_path());
                    let landed: &Location = self.current.insert(location);
                    return Ok(landed);
                }
            }
        }

        Err(Navigation::RedirectLoop(target.to_owned()).into())
    }
}
