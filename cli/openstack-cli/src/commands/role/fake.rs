// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory identity service that records every call

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use identity_client::{
    Collection, Entity, Error, IdentityService, Resource, ResourceKind, Result, Role,
    RoleCollection, Scope, Target,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(ResourceKind, String),
    List(ResourceKind),
    Create(String),
    Update(String, String),
    Delete(String),
    Grant(String, Target, Scope),
    Revoke(String, Target, Scope),
}

impl Call {
    fn is_mutation(&self) -> bool {
        !matches!(self, Self::Get(..) | Self::List(_))
    }
}

type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct FakeCollection<T> {
    kind: ResourceKind,
    items: Vec<T>,
    log: CallLog,
}

#[async_trait]
impl<T> Collection for FakeCollection<T>
where
    T: Resource + Clone + Send + Sync,
{
    type Item = T;

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn get(&self, id: &str) -> Result<T> {
        self.log
            .lock()
            .unwrap()
            .push(Call::Get(self.kind, id.to_string()));
        self.items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| Error::Api {
                method: "GET".to_string(),
                path: format!("{}/{}", self.kind.collection(), id),
                status: 404,
                message: format!("Could not find {}: {}.", self.kind, id),
            })
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.log.lock().unwrap().push(Call::List(self.kind));
        Ok(self.items.clone())
    }
}

pub struct FakeRoles(FakeCollection<Role>);

impl FakeRoles {
    fn record(&self, call: Call) {
        self.0.log.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Collection for FakeRoles {
    type Item = Role;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Role
    }

    async fn get(&self, id: &str) -> Result<Role> {
        self.0.get(id).await
    }

    async fn list(&self) -> Result<Vec<Role>> {
        self.0.list().await
    }
}

#[async_trait]
impl RoleCollection for FakeRoles {
    async fn create(&self, name: &str) -> Result<Role> {
        self.record(Call::Create(name.to_string()));
        Ok(role(&format!("r-{name}"), name))
    }

    async fn update(&self, id: &str, name: &str) -> Result<Role> {
        self.record(Call::Update(id.to_string(), name.to_string()));
        Ok(role(id, name))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(Call::Delete(id.to_string()));
        Ok(())
    }

    async fn grant(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()> {
        self.record(Call::Grant(role_id.to_string(), target.clone(), scope.clone()));
        Ok(())
    }

    async fn revoke(&self, role_id: &str, target: &Target, scope: &Scope) -> Result<()> {
        self.record(Call::Revoke(role_id.to_string(), target.clone(), scope.clone()));
        Ok(())
    }
}

/// Seeded with:
/// - roles `reader`, `admin` and two roles named `member`
/// - user `alice`, group `ops`, project `web`
/// - domains `Default` (ID `default`) and `corp`
pub struct FakeIdentity {
    roles: FakeRoles,
    users: FakeCollection<Entity>,
    groups: FakeCollection<Entity>,
    domains: FakeCollection<Entity>,
    projects: FakeCollection<Entity>,
    log: CallLog,
}

fn role(id: &str, name: &str) -> Role {
    Role {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        domain_id: None,
        links: None,
    }
}

fn entity(id: &str, name: &str) -> Entity {
    Entity {
        id: id.to_string(),
        name: name.to_string(),
        domain_id: None,
    }
}

fn collection<T>(kind: ResourceKind, items: Vec<T>, log: &CallLog) -> FakeCollection<T> {
    FakeCollection {
        kind,
        items,
        log: Arc::clone(log),
    }
}

impl FakeIdentity {
    pub fn new() -> Self {
        let log = CallLog::default();

        Self {
            roles: FakeRoles(collection(
                ResourceKind::Role,
                vec![
                    role("r-reader", "reader"),
                    role("r-admin", "admin"),
                    role("r-member-1", "member"),
                    role("r-member-2", "member"),
                ],
                &log,
            )),
            users: collection(ResourceKind::User, vec![entity("u-alice", "alice")], &log),
            groups: collection(ResourceKind::Group, vec![entity("g-ops", "ops")], &log),
            domains: collection(
                ResourceKind::Domain,
                vec![entity("default", "Default"), entity("d-corp", "corp")],
                &log,
            ),
            projects: collection(ResourceKind::Project, vec![entity("p-web", "web")], &log),
            log,
        }
    }

    /// Every call made so far, lookups included
    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    /// Only the calls that would change the service
    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }
}

impl IdentityService for FakeIdentity {
    type Roles = FakeRoles;
    type Entities = FakeCollection<Entity>;

    fn roles(&self) -> &FakeRoles {
        &self.roles
    }

    fn users(&self) -> &FakeCollection<Entity> {
        &self.users
    }

    fn groups(&self) -> &FakeCollection<Entity> {
        &self.groups
    }

    fn domains(&self) -> &FakeCollection<Entity> {
        &self.domains
    }

    fn projects(&self) -> &FakeCollection<Entity> {
        &self.projects
    }
}
