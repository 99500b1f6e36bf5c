// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role labels issued by the booking platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Role {
    Superadmin,
    AccommodationOwner,
    Customer,
}

impl Role {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Superadmin => "Superadmin",
            Self::AccommodationOwner => "Accommodation Owner",
            Self::Customer => "Customer",
        }
    }

    pub(crate) fn matches(self, label: &str) -> bool {
        self.as_str() == label
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// An authenticated user as returned by the credential exchange.
///
/// The serialized form is the one persisted under the `auth_user` storage
/// key, so field names and order must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Identity {
    pub(crate) token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub(crate) token_type: String,
    pub(crate) id: String,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) role: String,
}

impl Identity {
    /// The role label, or `None` when the platform did not assign one.
    pub(crate) fn role(&self) -> Option<&str> {
        Some(self.role.as_str()).filter(|role| !role.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    use super::*;

    pub(crate) fn identity(role: &str) -> Identity {
        Identity {
            token: "test-token".to_owned(),
            token_type: "Bearer".to_owned(),
            id: "user-1".to_owned(),
            username: "testuser".to_owned(),
            email: "test@example.com".to_owned(),
            name: "Test User".to_owned(),
            role: role.to_owned(),
        }
    }

    #[test]
    fn serialized_layout() {
        assert_tokens(
            &identity("Customer"),
            &[
                Token::Struct {
                    name: "Identity",
                    len: 7,
                },
                Token::Str("token"),
                Token::Str("test-token"),
                Token::Str("type"),
                Token::Str("Bearer"),
                Token::Str("id"),
                Token::Str("user-1"),
                Token::Str("username"),
                Token::Str("testuser"),
                Token::Str("email"),
                Token::Str("test@example.com"),
                Token::Str("name"),
                Token::Str("Test User"),
                Token::Str("role"),
                Token::Str("Customer"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn token_type_defaults_to_bearer() {
        assert_de_tokens(
            &identity(""),
            &[
                Token::Struct {
                    name: "Identity",
                    len: 5,
                },
                Token::Str("token"),
                Token::Str("test-token"),
                Token::Str("id"),
                Token::Str("user-1"),
                Token::Str("username"),
                Token::Str("testuser"),
                Token::Str("email"),
                Token::Str("test@example.com"),
                Token::Str("name"),
                Token::Str("Test User"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn empty_role_is_absent() {
        assert_eq!(identity("").role(), None);
        assert_eq!(identity("Superadmin").role(), Some("Superadmin"));
    }

    #[test]
    fn role_labels_are_exact() {
        assert!(Role::AccommodationOwner.matches("Accommodation Owner"));
        assert!(!Role::AccommodationOwner.matches("accommodation owner"));
        assert!(!Role::Superadmin.matches("Superadmin "));
        assert_eq!(Role::Customer.to_string(), "Customer");
    }
}
