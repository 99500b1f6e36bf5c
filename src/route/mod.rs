// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod pattern;

use std::fmt;

use crate::session::Role;

pub(crate) const HOME: &str = "home";
pub(crate) const LOGIN: &str = "login";

const OWNERS: &[Role] = &[Role::Superadmin, Role::AccommodationOwner];
const CUSTOMERS: &[Role] = &[Role::Customer];

/// What a visitor needs before a route may be opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Access {
    pub(crate) requires_auth: bool,
    pub(crate) requires_guest: bool,
    /// Only consulted when `requires_auth` is set. Empty admits any role.
    pub(crate) roles: &'static [Role],
}

impl Access {
    pub(crate) const PUBLIC: Self = Self {
        requires_auth: false,
        requires_guest: false,
        roles: &[],
    };

    pub(crate) const GUEST: Self = Self {
        requires_auth: false,
        requires_guest: true,
        roles: &[],
    };

    pub(crate) const SIGNED_IN: Self = Self {
        requires_auth: true,
        requires_guest: false,
        roles: &[],
    };

    pub(crate) const fn roles(roles: &'static [Role]) -> Self {
        Self {
            requires_auth: true,
            requires_guest: false,
            roles,
        }
    }

    pub(crate) fn admits(&self, label: &str) -> bool {
        self.roles.iter().any(|role| role.matches(label))
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.requires_auth, self.requires_guest, self.roles) {
            (true, _, []) => f.write_str("signed in"),
            (true, _, roles) => {
                let labels: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
                write!(f, "signed in as {}", labels.join(" or "))
            }
            (false, true, _) => f.write_str("guests only"),
            (false, false, _) => f.write_str("public"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Route {
    pub(crate) name: &'static str,
    pub(crate) path: &'static str,
    pub(crate) view: &'static str,
    pub(crate) access: Access,
}

impl Route {
    const fn new(name: &'static str, path: &'static str, view: &'static str, access: Access) -> Self {
        Self {
            name,
            path,
            view,
            access,
        }
    }

    /// Builds a link to this route, or `None` if a path parameter is missing.
    pub(crate) fn href(&self, params: &[(&str, &str)]) -> Option<String> {
        pattern::fill(self.path, params)
    }
}

/// A route resolved from a concrete path.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Match {
    pub(crate) route: &'static Route,
    pub(crate) params: Vec<(String, String)>,
}

#[rustfmt::skip]
static ROUTES: &[Route] = &[
    Route::new(HOME, "/", "HomeView", Access::PUBLIC),
    Route::new("about", "/about", "AboutView", Access::PUBLIC),
    Route::new(LOGIN, "/login", "LoginView", Access::GUEST),

    Route::new("property-list", "/property", "PropertyList", Access::PUBLIC),
    Route::new("property-create", "/property/create", "PropertyForm", Access::roles(OWNERS)),
    Route::new("property-detail", "/property/:id", "PropertyDetail", Access::PUBLIC),
    Route::new("property-edit", "/property/edit/:id", "PropertyForm", Access::roles(OWNERS)),

    Route::new("room-type-list", "/room-type", "RoomTypeList", Access::SIGNED_IN),

    Route::new("booking-list", "/booking", "BookingList", Access::SIGNED_IN),
    Route::new("booking-create", "/booking/create", "BookingCreate", Access::SIGNED_IN),
    Route::new("booking-detail", "/booking/:id", "BookingDetail", Access::SIGNED_IN),
    Route::new("booking-update", "/booking/update/:id", "BookingUpdate", Access::SIGNED_IN),
    Route::new("booking-chart", "/booking/chart", "BookingChart", Access::roles(OWNERS)),

    Route::new("maintenance-list", "/maintenance", "MaintenanceList", Access::roles(OWNERS)),
    Route::new("maintenance-create", "/maintenance/create", "MaintenanceForm", Access::roles(OWNERS)),

    Route::new("support-dashboard", "/support", "SupportDashboardView", Access::SIGNED_IN),
    Route::new("support-ticket-detail", "/support/tickets/:id", "SupportTicketsView", Access::SIGNED_IN),

    Route::new("all-reviews", "/reviews", "ReviewListView", Access::PUBLIC),
    Route::new("review-create", "/reviews/create", "ReviewFormView", Access::roles(CUSTOMERS)),
    Route::new("my-reviews", "/reviews/my-reviews", "ReviewListView", Access::SIGNED_IN),
    Route::new("property-reviews", "/reviews/property/:propertyId", "ReviewListView", Access::PUBLIC),
    Route::new("review-detail", "/reviews/:reviewId", "ReviewDetailView", Access::PUBLIC),
];

pub(crate) fn iter() -> impl Iterator<Item = &'static Route> {
    ROUTES.iter()
}

pub(crate) fn by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Finds the most specific route whose pattern matches `path`.
pub(crate) fn resolve(path: &str) -> Option<Match> {
    ROUTES
        .iter()
        .filter_map(|route| pattern::capture(route.path, path).map(|params| Match { route, params }))
        .max_by(|left, right| pattern::specificity(left.route.path, right.route.path))
}
