// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for openstack-cli integration tests

// Allow unused code - these helpers are infrastructure for integration tests
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables the CLI reads that must not leak in from the caller
const OS_VARS: &[&str] = &[
    "OS_CLOUD",
    "OS_AUTH_URL",
    "OS_URL",
    "OS_TOKEN",
    "OS_USERNAME",
    "OS_PASSWORD",
    "OS_USER_DOMAIN_NAME",
    "OS_PROJECT_NAME",
    "OS_PROJECT_DOMAIN_NAME",
    "OS_INSECURE",
];

/// Unreachable identity URL; commands that reach the network fail fast
pub const DEAD_AUTH_URL: &str = "http://127.0.0.1:9/v3";

/// Get a Command for running the openstack binary
///
/// The environment is scrubbed of OS_* variables and the config directory
/// points at `config_dir`.
pub fn openstack_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("openstack").expect("Failed to find openstack binary");
    for var in OS_VARS {
        cmd.env_remove(var);
    }
    cmd.env("OS_CONFIG_DIR", config_dir);
    cmd
}

/// Command authenticated with a token against `auth_url`
pub fn openstack_with_token(config_dir: &Path, auth_url: &str) -> Command {
    let mut cmd = openstack_cmd(config_dir);
    cmd.env("OS_AUTH_URL", auth_url).env("OS_TOKEN", "test-token");
    cmd
}

/// Empty config directory
pub fn config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Write `profiles.d/<name>.json` under `dir`
pub fn write_profile(dir: &Path, name: &str, profile: &serde_json::Value) {
    let profiles = dir.join("profiles.d");
    std::fs::create_dir_all(&profiles).expect("Failed to create profiles.d");
    std::fs::write(
        profiles.join(format!("{name}.json")),
        serde_json::to_string_pretty(profile).expect("Failed to serialize profile"),
    )
    .expect("Failed to write profile");
}
