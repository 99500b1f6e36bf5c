// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{self, Result},
    session::{Identity, SessionStore},
    storage::Storage,
};

/// The remote half of signing in and out.
#[async_trait(?Send)]
pub(crate) trait AuthApi {
    async fn login(&self, email: &str, password: &SecretString) -> Result<Identity>;
    async fn logout(&self, token: &str) -> Result<()>;
}

#[async_trait(?Send)]
impl<T: AuthApi + ?Sized> AuthApi for Box<T> {
    async fn login(&self, email: &str, password: &SecretString) -> Result<Identity> {
        (**self).login(email, password).await
    }

    async fn logout(&self, token: &str) -> Result<()> {
        (**self).logout(token).await
    }
}

#[derive(Serialize)]
struct LoginRequest<'req> {
    email: &'req str,
    password: &'req str,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

/// Talks to the booking platform's REST authentication endpoints.
pub(crate) struct HttpAuthApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpAuthApi {
    pub(crate) fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &SecretString) -> Result<Identity> {
        let response = self
            .client
            .post(self.endpoint("auth/login"))
            .json(&LoginRequest {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| error::Login::Network(Some(e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| error::Login::Network(Some(e)))?;
        let envelope = serde_json::from_slice::<Envelope<Identity>>(&body).ok();
        debug!("Login answered with status {}", status);

        match envelope {
            Some(Envelope {
                success: true,
                data: Some(identity),
                ..
            }) if status.is_success() => Ok(identity),
            Some(envelope) => Err(login_failure(status, envelope.message).into()),
            None => Err(login_failure(status, None).into()),
        }
    }

    async fn logout(&self, token: &str) -> Result<()> {
        _ = self
            .client
            .post(self.endpoint("auth/logout"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Maps an unsuccessful login answer to the message shown to the user.
fn login_failure(status: StatusCode, message: Option<String>) -> error::Login {
    match message.filter(|message| !message.is_empty()) {
        Some(message) => error::Login::Rejected(message),
        None if status == StatusCode::UNAUTHORIZED => error::Login::InvalidCredentials,
        None if status.is_server_error() => error::Login::Server,
        None if status.is_success() => error::Login::Rejected("Login failed".to_owned()),
        None => error::Login::Network(None),
    }
}

/// Exchanges credentials and, on success, establishes the session.
pub(crate) async fn login<S: Storage>(
    api: &impl AuthApi,
    store: &mut SessionStore<S>,
    email: &str,
    password: &SecretString,
) -> Result<()> {
    if email.trim().is_empty() || password.expose_secret().is_empty() {
        return Err(error::Login::MissingCredentials.into());
    }

    let mut identity = api.login(email.trim(), password).await?;
    if identity.token.is_empty() {
        return Err(error::Login::Rejected("Login failed".to_owned()).into());
    }
    if identity.token_type.is_empty() {
        identity.token_type = "Bearer".to_owned();
    }

    store.establish_session(identity);
    Ok(())
}

/// Signs out remotely if possible. The local session is always ended.
pub(crate) async fn logout<S: Storage>(api: &impl AuthApi, store: &mut SessionStore<S>) {
    if let Some(token) = store.token().map(str::to_owned) {
        if let Err(e) = api.logout(&token).await {
            warn!("Logout error: {}", e);
        }
    }
    store.end_session();
}
