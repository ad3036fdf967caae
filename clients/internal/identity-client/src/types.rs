// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Identity v3 resource types

use serde::{Deserialize, Serialize};

/// The kinds of identity resources the client can look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Role,
    User,
    Group,
    Domain,
    Project,
}

impl ResourceKind {
    /// URL collection segment, e.g. `roles`
    pub fn collection(self) -> &'static str {
        match self {
            Self::Role => "roles",
            Self::User => "users",
            Self::Group => "groups",
            Self::Domain => "domains",
            Self::Project => "projects",
        }
    }

    /// JSON envelope key for a single member, e.g. `role`
    pub fn member_key(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::User => "user",
            Self::Group => "group",
            Self::Domain => "domain",
            Self::Project => "project",
        }
    }
}

/// Anything that can be resolved by name or ID
pub trait Resource {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Resource links as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Role {
    /// Role attributes as (field, value) pairs sorted by field name
    ///
    /// Absent optional attributes render as an empty value so every role
    /// produces the same set of rows.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("description", self.description.clone().unwrap_or_default()),
            ("domain_id", self.domain_id.clone().unwrap_or_default()),
            (
                "links",
                self.links
                    .as_ref()
                    .and_then(|l| l.self_link.clone())
                    .unwrap_or_default(),
            ),
        ];
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

impl Resource for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A user, group, domain or project, reduced to what lookups need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

impl Resource for Entity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Who a role is assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    User(String),
    Group(String),
}

impl Target {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::User(_) => ResourceKind::User,
            Self::Group(_) => ResourceKind::Group,
        }
    }

    /// The user or group reference (name-or-ID before resolution, ID after)
    pub fn reference(&self) -> &str {
        match self {
            Self::User(r) | Self::Group(r) => r,
        }
    }

    /// Same kind of target, pointing at a different reference
    pub fn with_reference(&self, reference: impl Into<String>) -> Self {
        match self {
            Self::User(_) => Self::User(reference.into()),
            Self::Group(_) => Self::Group(reference.into()),
        }
    }
}

/// Where a role assignment applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Domain(String),
    Project(String),
}

impl Scope {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Domain(_) => ResourceKind::Domain,
            Self::Project(_) => ResourceKind::Project,
        }
    }

    /// The domain or project reference (name-or-ID before resolution, ID after)
    pub fn reference(&self) -> &str {
        match self {
            Self::Domain(r) | Self::Project(r) => r,
        }
    }

    /// Same kind of scope, pointing at a different reference
    pub fn with_reference(&self, reference: impl Into<String>) -> Self {
        match self {
            Self::Domain(_) => Self::Domain(reference.into()),
            Self::Project(_) => Self::Project(reference.into()),
        }
    }
}

/// Path of the assignment resource for a role on a target within a scope
///
/// IDs are percent-encoded.
pub fn assignment_path(role_id: &str, target: &Target, scope: &Scope) -> String {
    format!(
        "{}/{}/{}/{}/roles/{}",
        scope.kind().collection(),
        urlencoding::encode(scope.reference()),
        target.kind().collection(),
        urlencoding::encode(target.reference()),
        urlencoding::encode(role_id)
    )
}
