// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::{
    route::{self, Route},
    session::SessionView,
};

/// The outcome of checking a navigation against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    Allow,
    /// Not signed in. `redirect` is the full path originally asked for.
    RedirectToLogin { redirect: String },
    /// Signed in without a role the route admits.
    Forbidden,
    /// Signed in and asking for a guest-only page.
    GuestOnly,
}

/// Where to go instead of the requested route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Redirect {
    pub(crate) route: &'static str,
    pub(crate) query: Vec<(String, String)>,
}

impl Decision {
    pub(crate) fn redirect_target(&self) -> Option<Redirect> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { redirect } => Some(Redirect {
                route: route::LOGIN,
                query: vec![("redirect".to_owned(), redirect.clone())],
            }),
            Self::Forbidden | Self::GuestOnly => Some(Redirect {
                route: route::HOME,
                query: vec![],
            }),
        }
    }
}

/// Decides whether `session` may open `target`; `full_path` is the path and
/// query that was asked for.
pub(crate) fn decide(target: &Route, full_path: &str, session: &impl SessionView) -> Decision {
    let access = &target.access;

    if access.requires_auth {
        if !session.is_authenticated() {
            debug!("{} requires a session, sending visitor to log in", target.name);
            return Decision::RedirectToLogin {
                redirect: full_path.to_owned(),
            };
        }

        if !access.roles.is_empty() && !session.role().is_some_and(|role| access.admits(role)) {
            debug!(
                "{} is not open to role {}",
                target.name,
                session.role().unwrap_or("(none)")
            );
            return Decision::Forbidden;
        }
    }

    if access.requires_guest && session.is_authenticated() {
        debug!("{} is guest-only, sending signed-in user home", target.name);
        return Decision::GuestOnly;
    }

    Decision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::Fake;

    fn route(name: &str) -> &'static Route {
        route::by_name(name).unwrap_or_else(|| panic!("no route named {name}"))
    }

    fn decide_for(name: &str, session: &Fake) -> Decision {
        let target = route(name);
        decide(target, target.path, session)
    }

    #[test]
    fn guests_are_sent_to_login_with_return_path() {
        assert_eq!(
            decide(route("booking-list"), "/booking?page=2", &Fake::guest()),
            Decision::RedirectToLogin {
                redirect: "/booking?page=2".to_owned()
            }
        );
    }

    #[test]
    fn every_signed_in_route_sends_guests_to_login() {
        for target in route::iter().filter(|route| route.access.requires_auth) {
            assert_eq!(
                decide(target, target.path, &Fake::guest()),
                Decision::RedirectToLogin {
                    redirect: target.path.to_owned()
                },
                "{}",
                target.name
            );
        }
    }

    #[test]
    fn unlisted_roles_are_forbidden() {
        for target in route::iter().filter(|route| !route.access.roles.is_empty()) {
            for label in ["Superadmin", "Accommodation Owner", "Customer", "Guest"] {
                let session = Fake::signed_in(label);
                let expected = if target.access.admits(label) {
                    Decision::Allow
                } else {
                    Decision::Forbidden
                };
                assert_eq!(
                    decide(target, target.path, &session),
                    expected,
                    "{} as {}",
                    target.name,
                    label
                );
            }
        }
    }

    #[test]
    fn roleless_session_is_never_trusted_with_restricted_routes() {
        let session = Fake {
            authenticated: true,
            role: None,
        };
        assert_eq!(decide_for("property-create", &session), Decision::Forbidden);
        assert_eq!(decide_for("booking-list", &session), Decision::Allow);
    }

    #[test]
    fn unrestricted_routes_admit_any_role() {
        for label in ["Superadmin", "Accommodation Owner", "Customer", "Guest"] {
            assert_eq!(
                decide_for("booking-list", &Fake::signed_in(label)),
                Decision::Allow
            );
        }
    }

    #[test]
    fn guest_only_routes() {
        assert_eq!(decide_for("login", &Fake::guest()), Decision::Allow);
        assert_eq!(
            decide_for("login", &Fake::signed_in("Customer")),
            Decision::GuestOnly
        );
    }

    #[test]
    fn public_routes_are_open() {
        assert_eq!(decide_for("home", &Fake::guest()), Decision::Allow);
        assert_eq!(decide_for("property-list", &Fake::signed_in("Customer")), Decision::Allow);
    }

    #[test]
    fn redirect_targets() {
        assert_eq!(Decision::Allow.redirect_target(), None);
        assert_eq!(
            Decision::RedirectToLogin {
                redirect: "/booking".to_owned()
            }
            .redirect_target(),
            Some(Redirect {
                route: route::LOGIN,
                query: vec![("redirect".to_owned(), "/booking".to_owned())],
            })
        );
        assert_eq!(
            Decision::Forbidden.redirect_target().map(|r| r.route),
            Some(route::HOME)
        );
        assert_eq!(
            Decision::GuestOnly.redirect_target().map(|r| r.route),
            Some(route::HOME)
        );
    }
}
