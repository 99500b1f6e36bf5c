// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("login failed: {0}")]
    Login(#[from] Login),
    #[error("navigation failed: {0}")]
    Navigation(#[from] Navigation),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

#[derive(Error, Debug)]
pub(crate) enum Login {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Server error. Please try again later.")]
    Server,
    #[error("Network error. Please check your connection.")]
    Network(#[source] Option<reqwest::Error>),
}

#[derive(Error, Debug)]
pub(crate) enum Navigation {
    #[error(r#"no route matches "{}""#, .0.escape_default())]
    NoMatch(String),
    #[error(r#"navigation to "{}" kept redirecting"#, .0.escape_default())]
    RedirectLoop(String),
    #[error(r#"could not parse navigation target "{}": {}"#, .target.escape_default(), .source)]
    InvalidTarget {
        target: String,
        source: url::ParseError,
    },
}
