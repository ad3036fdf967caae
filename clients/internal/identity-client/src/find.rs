// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Name-or-ID resolution shared by every command

use crate::Collection;
use crate::error::{Error, Result};
use crate::types::Resource;

/// Resolve a name or ID to a single resource
///
/// A direct fetch by ID is tried first. If the service answers that it has
/// no such ID the collection is listed and searched for an exact name match,
/// which must be unique. Any other failure is returned as is, so rejected
/// credentials are never sent a second time.
pub async fn find_resource<C>(collection: &C, name_or_id: &str) -> Result<C::Item>
where
    C: Collection + ?Sized,
{
    match collection.get(name_or_id).await {
        Ok(item) => return Ok(item),
        Err(e) if !e.is_lookup_miss() => return Err(e),
        Err(e) => tracing::debug!(
            kind = %collection.kind(),
            name_or_id,
            error = %e,
            "lookup by ID failed, searching by name"
        ),
    }

    let mut matches = collection
        .list()
        .await?
        .into_iter()
        .filter(|item| item.name() == name_or_id);

    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item),
        (None, _) => Err(Error::NotFound {
            kind: collection.kind(),
            name_or_id: name_or_id.to_string(),
        }),
        (Some(_), Some(_)) => Err(Error::NoUniqueMatch {
            kind: collection.kind(),
            name: name_or_id.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entity, ResourceKind};
    use async_trait::async_trait;

    struct Projects(Vec<Entity>);

    #[async_trait]
    impl Collection for Projects {
        type Item = Entity;

        fn kind(&self) -> ResourceKind {
            ResourceKind::Project
        }

        async fn get(&self, id: &str) -> Result<Entity> {
            self.0
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| Error::Api {
                    method: "GET".to_string(),
                    path: format!("projects/{id}"),
                    status: 404,
                    message: "Could not find project".to_string(),
                })
        }

        async fn list(&self) -> Result<Vec<Entity>> {
            Ok(self.0.clone())
        }
    }

    fn project(id: &str, name: &str) -> Entity {
        Entity {
            id: id.to_string(),
            name: name.to_string(),
            domain_id: Some("default".to_string()),
        }
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let projects = Projects(vec![project("p1", "ops"), project("p2", "dev")]);
        let found = find_resource(&projects, "p2").await;
        assert!(matches!(found, Ok(p) if p.name == "dev"));
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let projects = Projects(vec![project("p1", "ops"), project("p2", "dev")]);
        let found = find_resource(&projects, "ops").await;
        assert!(matches!(found, Ok(p) if p.id == "p1"));
    }

    #[tokio::test]
    async fn test_find_not_found() {
        let projects = Projects(vec![project("p1", "ops")]);
        let err = find_resource(&projects, "qa").await.err();
        assert!(matches!(err, Some(Error::NotFound { kind: ResourceKind::Project, .. })));
        assert_eq!(
            err.map(|e| e.to_string()).unwrap_or_default(),
            "No project with a name or ID of 'qa' exists."
        );
    }

    #[tokio::test]
    async fn test_find_ambiguous() {
        let projects = Projects(vec![project("p1", "ops"), project("p2", "ops")]);
        let err = find_resource(&projects, "ops").await.err();
        assert!(matches!(err, Some(Error::NoUniqueMatch { .. })));
        assert_eq!(
            err.map(|e| e.to_string()).unwrap_or_default(),
            "More than one project exists with the name 'ops'."
        );
    }

    /// Every request fails before reaching the service
    struct Rejecting {
        lists: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl Collection for Rejecting {
        type Item = Entity;

        fn kind(&self) -> ResourceKind {
            ResourceKind::Project
        }

        async fn get(&self, _id: &str) -> Result<Entity> {
            Err(Error::Auth("The request you have made requires authentication. (401)".into()))
        }

        async fn list(&self) -> Result<Vec<Entity>> {
            self.lists.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Err(Error::Auth("The request you have made requires authentication. (401)".into()))
        }
    }

    #[tokio::test]
    async fn test_auth_failure_is_not_retried_by_name() {
        let projects = Rejecting {
            lists: Default::default(),
        };
        let err = find_resource(&projects, "ops").await.err();
        assert!(matches!(err, Some(Error::Auth(_))));
        assert_eq!(projects.lists.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
