// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod identity;
mod store;

pub(crate) use identity::{Identity, Role};
pub(crate) use store::SessionStore;

/// Read access to whoever is signed in, as seen by the navigation guard.
pub(crate) trait SessionView {
    fn is_authenticated(&self) -> bool;
    fn role(&self) -> Option<&str>;

    fn has_role(&self, role: Role) -> bool {
        self.role().is_some_and(|label| role.matches(label))
    }

    fn is_superadmin(&self) -> bool {
        self.has_role(Role::Superadmin)
    }

    fn is_accommodation_owner(&self) -> bool {
        self.has_role(Role::AccommodationOwner)
    }

    fn is_customer(&self) -> bool {
        self.has_role(Role::Customer)
    }
}

/// In-memory session state with no storage attached.
///
/// The token and the identity are always set and cleared together, and the
/// token always equals `identity.token`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Session {
    identity: Option<Identity>,
    token: Option<String>,
}

impl Session {
    pub(crate) fn establish(&mut self, identity: Identity) {
        debug_assert!(!identity.token.is_empty());
        self.token = Some(identity.token.clone());
        self.identity = Some(identity);
    }

    pub(crate) fn clear(&mut self) {
        self.identity = None;
        self.token = None;
    }

    pub(crate) const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl SessionView for Session {
    fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    fn role(&self) -> Option<&str> {
        self.identity.as_ref().and_then(Identity::role)
    }
}
