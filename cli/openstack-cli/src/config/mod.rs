// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;
use secrecy::SecretString;

/// Connection settings given on the command line or in OS_* variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub auth_url: Option<String>,
    pub url: Option<String>,
    pub token: Option<SecretString>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub user_domain_name: Option<String>,
    pub project_name: Option<String>,
    pub project_domain_name: Option<String>,
    pub insecure: bool,
}

impl Overrides {
    fn has_endpoint(&self) -> bool {
        self.auth_url.is_some() || self.url.is_some()
    }

    /// Layer these settings over a profile
    fn apply(&self, profile: &mut Profile) {
        fn set<T: Clone>(field: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                field.clone_from(value);
            }
        }

        set(&mut profile.auth_url, &self.auth_url);
        set(&mut profile.url, &self.url);
        set(&mut profile.token, &self.token);
        set(&mut profile.username, &self.username);
        set(&mut profile.password, &self.password);
        set(&mut profile.user_domain_name, &self.user_domain_name);
        set(&mut profile.project_name, &self.project_name);
        set(&mut profile.project_domain_name, &self.project_domain_name);
        profile.insecure |= self.insecure;
    }
}

/// Resolve which profile to use
///
/// Priority:
/// 1. --os-cloud / OS_CLOUD
/// 2. "env" if OS_AUTH_URL/OS_URL is set (flags and environment only)
/// 3. Current profile from config.json
///
/// Flags and OS_* variables override whatever the profile file says.
pub fn resolve_profile(cloud: Option<&str>, overrides: &Overrides) -> Result<Profile> {
    let mut profile = if let Some(name) = cloud {
        Profile::load(name)?
    } else if overrides.has_endpoint() {
        Profile::named("env")
    } else {
        let config = Config::load()?;
        match config.current_profile() {
            Some(name) => Profile::load(name)?,
            None => {
                return Err(anyhow::anyhow!(
                    "No cloud configured. Use --os-cloud or set OS_AUTH_URL and credentials \
                     (OS_TOKEN, or OS_USERNAME and OS_PASSWORD)"
                ));
            }
        }
    };

    overrides.apply(&mut profile);
    tracing::debug!(profile = %profile.name, "resolved profile");
    Ok(profile)
}
