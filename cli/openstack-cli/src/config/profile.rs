// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile types

use anyhow::{Result, bail};
use identity_client::AuthConfig;
use identity_client::auth::DEFAULT_DOMAIN_NAME;
use secrecy::SecretString;
use serde::Deserialize;

/// A connection profile
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile name
    #[serde(default)]
    pub name: String,

    /// Identity v3 URL
    pub auth_url: Option<String>,

    /// Endpoint override for API calls (token auth)
    pub url: Option<String>,

    /// Pre-issued token
    pub token: Option<SecretString>,

    pub username: Option<String>,

    pub password: Option<SecretString>,

    pub user_domain_name: Option<String>,

    /// Project to scope password-issued tokens to
    pub project_name: Option<String>,

    pub project_domain_name: Option<String>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,
}

impl Profile {
    /// An empty profile to be filled from flags and environment
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> Result<Self> {
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let mut profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        if profile.name.is_empty() {
            profile.name = name.to_string();
        }
        Ok(profile)
    }

    /// Convert to the client's AuthConfig
    ///
    /// A token wins over a username/password pair when both are present.
    pub fn to_auth_config(&self) -> Result<AuthConfig> {
        let Some(auth_url) = self.auth_url.clone().or_else(|| self.url.clone()) else {
            bail!(
                "Profile '{}' has no endpoint. Set OS_AUTH_URL (or OS_URL with OS_TOKEN)",
                self.name
            );
        };

        let config = if let Some(token) = &self.token {
            let mut config = AuthConfig::token(auth_url, token.clone());
            if let Some(url) = &self.url {
                config = config.with_endpoint(url.clone());
            }
            config
        } else {
            let (Some(username), Some(password)) = (&self.username, &self.password) else {
                bail!(
                    "Profile '{}' has no credentials. Set OS_TOKEN or OS_USERNAME and OS_PASSWORD",
                    self.name
                );
            };
            let mut config = AuthConfig::password(auth_url, username.clone(), password.clone())
                .with_user_domain(
                    self.user_domain_name
                        .clone()
                        .unwrap_or_else(|| DEFAULT_DOMAIN_NAME.to_string()),
                );
            if let Some(project) = &self.project_name {
                config = config.with_project(
                    project.clone(),
                    self.project_domain_name
                        .clone()
                        .unwrap_or_else(|| DEFAULT_DOMAIN_NAME.to_string()),
                );
            }
            if let Some(url) = &self.url {
                config = config.with_endpoint(url.clone());
            }
            config
        };

        Ok(config.with_insecure(self.insecure))
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Current profile name
    pub profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the current profile name
    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}
