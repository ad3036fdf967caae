// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for identity requests
//!
//! Two methods are supported: a pre-issued token, sent as-is, and password
//! authentication, which exchanges credentials for a token via
//! `POST /auth/tokens` and reads it back from `X-Subject-Token`.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::error::{Error, Result};

/// Header carrying the token on every authenticated request
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Header the service returns the issued token in
pub const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// Domain used when none is configured
pub const DEFAULT_DOMAIN_NAME: &str = "Default";

/// How to obtain a token
#[derive(Debug)]
pub enum AuthMethod {
    /// Use an already issued token
    Token(SecretString),
    /// Exchange user credentials for a token
    Password {
        username: String,
        password: SecretString,
        user_domain: String,
    },
}

/// Project the password-issued token is scoped to
#[derive(Debug, Clone)]
pub struct ProjectScope {
    pub name: String,
    pub domain: String,
}

/// Authentication configuration
#[derive(Debug)]
pub struct AuthConfig {
    /// Identity v3 endpoint, e.g. `https://keystone.example.com:5000/v3`
    pub auth_url: String,
    /// Endpoint override for API calls (defaults to `auth_url`)
    pub endpoint: Option<String>,
    pub method: AuthMethod,
    pub project: Option<ProjectScope>,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl AuthConfig {
    /// Token authentication
    pub fn token(auth_url: impl Into<String>, token: impl Into<SecretString>) -> Self {
        Self {
            auth_url: auth_url.into(),
            endpoint: None,
            method: AuthMethod::Token(token.into()),
            project: None,
            insecure: false,
        }
    }

    /// Password authentication in the default user domain
    pub fn password(
        auth_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Self {
        Self {
            auth_url: auth_url.into(),
            endpoint: None,
            method: AuthMethod::Password {
                username: username.into(),
                password: password.into(),
                user_domain: DEFAULT_DOMAIN_NAME.to_string(),
            },
            project: None,
            insecure: false,
        }
    }

    /// Set the user domain (password auth only)
    pub fn with_user_domain(mut self, domain: impl Into<String>) -> Self {
        if let AuthMethod::Password { user_domain, .. } = &mut self.method {
            *user_domain = domain.into();
        }
        self
    }

    /// Scope the issued token to a project
    pub fn with_project(mut self, name: impl Into<String>, domain: impl Into<String>) -> Self {
        self.project = Some(ProjectScope {
            name: name.into(),
            domain: domain.into(),
        });
        self
    }

    /// Send API calls somewhere other than `auth_url`
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Base URL for API calls
    pub fn api_base(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(&self.auth_url)
    }
}

/// Body of a password token request, scoped to `project` when given
fn password_request(
    username: &str,
    password: &SecretString,
    user_domain: &str,
    project: Option<&ProjectScope>,
) -> serde_json::Value {
    let mut body = json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": {
                    "user": {
                        "name": username,
                        "domain": { "name": user_domain },
                        "password": password.expose_secret(),
                    }
                }
            }
        }
    });
    if let Some(project) = project {
        body["auth"]["scope"] = json!({
            "project": {
                "name": project.name,
                "domain": { "name": project.domain },
            }
        });
    }
    body
}

/// Obtain a token for the configured method
///
/// Token auth returns the configured token without contacting the service.
pub(crate) async fn issue_token(
    http: &reqwest::Client,
    config: &AuthConfig,
) -> Result<SecretString> {
    let (username, body) = match &config.method {
        AuthMethod::Token(token) => return Ok(token.clone()),
        AuthMethod::Password {
            username,
            password,
            user_domain,
        } => (
            username,
            password_request(username, password, user_domain, config.project.as_ref()),
        ),
    };

    let url = format!("{}/auth/tokens", config.auth_url.trim_end_matches('/'));
    tracing::debug!(%url, user = %username, "requesting token");

    let response = http.post(&url).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(Error::Auth(format!(
            "{} ({})",
            crate::extract_error_message(&text),
            status.as_u16()
        )));
    }

    let token = response
        .headers()
        .get(SUBJECT_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            Error::Auth(format!("response carried no {SUBJECT_TOKEN_HEADER} header"))
        })?;

    Ok(SecretString::from(token.to_owned()))
}
