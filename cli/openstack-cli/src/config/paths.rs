// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! On-disk layout of named clouds
//!
//! ```text
//! <config dir>/config.json               {"profile": "<cloud used by default>"}
//! <config dir>/profiles.d/<cloud>.json   one connection profile per cloud
//! ```
//!
//! `--os-cloud <cloud>` selects `profiles.d/<cloud>.json`.

use std::path::PathBuf;

/// The config dir: `OS_CONFIG_DIR`, else `~/.openstack` when it is a
/// directory, else `openstack/` under the platform config dir
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("OS_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    let dot_dir = dirs::home_dir().map(|home| home.join(".openstack"));
    if let Some(dir) = dot_dir.as_ref().filter(|dir| dir.is_dir()) {
        return dir.clone();
    }

    match (dirs::config_dir(), dot_dir) {
        (Some(platform), _) => platform.join("openstack"),
        (None, Some(dot_dir)) => dot_dir,
        (None, None) => PathBuf::from(".openstack"),
    }
}

pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// `config.json`, naming the cloud used when none is selected
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// `profiles.d/<cloud>.json`
pub fn profile_path(cloud: &str) -> PathBuf {
    profiles_dir().join(format!("{cloud}.json"))
}
