// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenStack Identity v3 Client Library
//!
//! Typed access to the parts of the Identity v3 API needed to manage roles
//! and role assignments: role CRUD, grant/revoke on a user-or-group within a
//! domain-or-project, and get/list lookups for users, groups, domains and
//! projects.
//!
//! ## Usage
//!
//! ```ignore
//! use identity_client::{AuthConfig, Client, IdentityService, RoleCollection, find_resource};
//!
//! let auth = AuthConfig::password("https://keystone.example.com:5000/v3", "admin", "secret")
//!     .with_project("admin", "Default");
//! let client = Client::new(auth)?;
//!
//! let role = find_resource(client.roles(), "reader").await?;
//! let user = find_resource(client.users(), "alice").await?;
//! let project = find_resource(client.projects(), "ops").await?;
//! client
//!     .roles()
//!     .grant(&role.id, &Target::User(user.id), &Scope::Project(project.id))
//!     .await?;
//! ```
//!
//! The token is requested lazily, on the first call that needs it, and
//! reused by every later call made through the same client.
//!
//! The [`IdentityService`], [`Collection`] and [`RoleCollection`] traits are
//! the seams command code is written against, so it can run over an
//! in-memory implementation in tests.

pub mod auth;
pub mod error;
mod find;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::OnceCell;

pub use auth::{AuthConfig, AuthMethod, ProjectScope};
pub use error::{Error, Result};
pub use find::find_resource;
pub use types::{Entity, Links, Resource, ResourceKind, Role, Scope, Target, assignment_path};

/// A resource collection supporting lookups
#[async_trait]
pub trait Collection: Send + Sync {
    type Item: Resource + Send;

    /// Kind of resource held, for messages
    fn kind(&self) -> ResourceKind;

    /// Fetch one resource by ID
    async fn get(&self, id: &str) -> Result<Self::Item>;

    /// List every resource in the collection, in service order
    async fn list(&self) -> Result<Vec<Self::Item>>;
}

/// Role collection with the mutating operations
#[async_trait]
pub trait RoleCollection: Collection<Item = Role> {
    async fn create(&self, name: &str) -> Result<Role>;

    /// Rename a role
    async fn update(&self, id: &str, name: &str) -> Result<Role>;

    async fn delete(&self, id: &str) -> Result<()>;

    /// Assign a role. `target` and `scope` must carry resolved IDs.
    async fn grant(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()>;

    /// Remove a role assignment. `target` and `scope` must carry resolved IDs.
    async fn revoke(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()>;
}

/// The identity service as seen by command code
pub trait IdentityService: Send + Sync {
    type Roles: RoleCollection;
    type Entities: Collection<Item = Entity>;

    fn roles(&self) -> &Self::Roles;
    fn users(&self) -> &Self::Entities;
    fn groups(&self) -> &Self::Entities;
    fn domains(&self) -> &Self::Entities;
    fn projects(&self) -> &Self::Entities;
}

/// Pull the human-readable message out of an identity error body
///
/// The service answers with `{"error": {"code", "message", "title"}}`;
/// anything else is returned trimmed.
pub(crate) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no details".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

/// Shared HTTP plumbing behind every manager
struct Transport {
    http: reqwest::Client,
    base: String,
    auth: AuthConfig,
    token: OnceCell<SecretString>,
}

impl Transport {
    async fn token(&self) -> Result<&SecretString> {
        self.token
            .get_or_try_init(|| auth::issue_token(&self.http, &self.auth))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response> {
        let token = self.token().await?;
        let url = format!("{}/{}", self.base, path);
        tracing::debug!(%method, %url, "identity request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(auth::AUTH_TOKEN_HEADER, token.expose_secret());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(Error::Api {
            method: method.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            message: extract_error_message(&text),
        })
    }

    /// Send a request and unwrap the `{"<key>": ...}` envelope of the reply
    async fn send_enveloped<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        key: &str,
    ) -> Result<T> {
        let response = self.send(method.clone(), path, body).await?;
        let mut envelope: Value = response.json().await?;
        let inner = envelope
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| Error::Api {
                method: method.to_string(),
                path: path.to_string(),
                status: 200,
                message: format!("response is missing the '{key}' field"),
            })?;
        serde_json::from_value(inner).map_err(|e| Error::Api {
            method: method.to_string(),
            path: path.to_string(),
            status: 200,
            message: format!("malformed '{key}' field: {e}"),
        })
    }

    async fn get_member<T: DeserializeOwned>(&self, kind: ResourceKind, id: &str) -> Result<T> {
        let path = format!("{}/{}", kind.collection(), urlencoding::encode(id));
        self.send_enveloped(Method::GET, &path, None, kind.member_key())
            .await
    }

    async fn list_members<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<Vec<T>> {
        self.send_enveloped(Method::GET, kind.collection(), None, kind.collection())
            .await
    }
}

/// Role manager
pub struct Roles {
    transport: Arc<Transport>,
}

#[async_trait]
impl Collection for Roles {
    type Item = Role;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Role
    }

    async fn get(&self, id: &str) -> Result<Role> {
        self.transport.get_member(ResourceKind::Role, id).await
    }

    async fn list(&self) -> Result<Vec<Role>> {
        self.transport.list_members(ResourceKind::Role).await
    }
}

#[async_trait]
impl RoleCollection for Roles {
    async fn create(&self, name: &str) -> Result<Role> {
        let body = json!({ "role": { "name": name } });
        self.transport
            .send_enveloped(Method::POST, "roles", Some(body), "role")
            .await
    }

    async fn update(&self, id: &str, name: &str) -> Result<Role> {
        let body = json!({ "role": { "name": name } });
        let path = format!("roles/{}", urlencoding::encode(id));
        self.transport
            .send_enveloped(Method::PATCH, &path, Some(body), "role")
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("roles/{}", urlencoding::encode(id));
        self.transport.send(Method::DELETE, &path, None).await?;
        Ok(())
    }

    async fn grant(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()> {
        let path = assignment_path(role_id, target, scope);
        self.transport.send(Method::PUT, &path, None).await?;
        Ok(())
    }

    async fn revoke(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()> {
        let path = assignment_path(role_id, target, scope);
        self.transport.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}

/// Read-only manager for users, groups, domains or projects
pub struct Entities {
    transport: Arc<Transport>,
    kind: ResourceKind,
}

#[async_trait]
impl Collection for Entities {
    type Item = Entity;

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn get(&self, id: &str) -> Result<Entity> {
        self.transport.get_member(self.kind, id).await
    }

    async fn list(&self) -> Result<Vec<Entity>> {
        self.transport.list_members(self.kind).await
    }
}

/// Authenticated identity client
pub struct Client {
    roles: Roles,
    users: Entities,
    groups: Entities,
    domains: Entities,
    projects: Entities,
}

impl Client {
    /// Create a new client
    ///
    /// No request is made here; authentication happens on the first call.
    pub fn new(auth: AuthConfig) -> Result<Self> {
        let base = auth.api_base().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base).map_err(|e| Error::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        // reqwest is built without a bundled provider; a second install
        // attempt returns Err and leaves the first in place.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(auth.insecure)
            .build()?;

        let transport = Arc::new(Transport {
            http,
            base,
            auth,
            token: OnceCell::new(),
        });
        let entities = |kind| Entities {
            transport: Arc::clone(&transport),
            kind,
        };

        Ok(Self {
            users: entities(ResourceKind::User),
            groups: entities(ResourceKind::Group),
            domains: entities(ResourceKind::Domain),
            projects: entities(ResourceKind::Project),
            roles: Roles {
                transport: Arc::clone(&transport),
            },
        })
    }
}

impl IdentityService for Client {
    type Roles = Roles;
    type Entities = Entities;

    fn roles(&self) -> &Roles {
        &self.roles
    }

    fn users(&self) -> &Entities {
        &self.users
    }

    fn groups(&self) -> &Entities {
        &self.groups
    }

    fn domains(&self) -> &Entities {
        &self.domains
    }

    fn projects(&self) -> &Entities {
        &self.projects
    }
}
