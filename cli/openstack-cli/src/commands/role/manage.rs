// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role create/delete/list/rename/show

use identity_client::{Collection, IdentityService, Result, Role, RoleCollection, find_resource};

use super::{Diagnostic, Outcome};

/// Fixed projection used by `role list`
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub columns: [&'static str; 2],
    pub rows: Vec<[String; 2]>,
}

impl Listing {
    /// One row per role, in the order given
    pub fn from_roles(roles: &[Role]) -> Self {
        Self {
            columns: ["ID", "Name"],
            rows: roles
                .iter()
                .map(|role| [role.id.clone(), role.name.clone()])
                .collect(),
        }
    }
}

pub async fn create_role<S: IdentityService>(service: &S, name: &str) -> Result<Role> {
    tracing::debug!(name, "create role");
    service.roles().create(name).await
}

pub async fn delete_role<S: IdentityService>(service: &S, role: &str) -> Result<()> {
    tracing::debug!(role, "delete role");
    let role = find_resource(service.roles(), role).await?;
    service.roles().delete(&role.id).await
}

pub async fn list_roles<S: IdentityService>(service: &S) -> Result<Vec<Role>> {
    tracing::debug!("list roles");
    service.roles().list().await
}

/// Rename a role; skipped when no new name is given
pub async fn rename_role<S: IdentityService>(
    service: &S,
    role: &str,
    name: Option<&str>,
) -> Result<Outcome> {
    tracing::debug!(role, ?name, "rename role");

    let Some(name) = name else {
        return Ok(Outcome::Skipped(Diagnostic::NothingToUpdate));
    };

    let role = find_resource(service.roles(), role).await?;
    service.roles().update(&role.id, name).await?;
    Ok(Outcome::Done(()))
}

pub async fn show_role<S: IdentityService>(service: &S, role: &str) -> Result<Role> {
    tracing::debug!(role, "show role");
    find_resource(service.roles(), role).await
}
