// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, etc.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use predicates::prelude::*;

#[test]
fn test_openstack_version() {
    let dir = common::config_dir();
    common::openstack_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("openstack"));
}

#[test]
fn test_openstack_help() {
    let dir = common::config_dir();
    common::openstack_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("role"))
        .stdout(predicate::str::contains("--os-cloud"));
}

#[test]
fn test_openstack_without_command_fails() {
    let dir = common::config_dir();
    common::openstack_cmd(dir.path()).assert().failure();
}

#[test]
fn test_role_help_lists_actions() {
    let dir = common::config_dir();
    let assert = common::openstack_cmd(dir.path())
        .args(["role", "--help"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for action in ["add", "create", "delete", "list", "remove", "set", "show"] {
        assert!(stdout.contains(action), "missing {action} in:\n{stdout}");
    }
}

#[test]
fn test_password_is_hidden_in_help() {
    let dir = common::config_dir();
    common::openstack_cmd(dir.path())
        .env("OS_PASSWORD", "hunter2")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}
