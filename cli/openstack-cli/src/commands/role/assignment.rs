// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Granting and revoking roles on a user or group within a domain or project

use clap::Args;
use identity_client::{
    IdentityService, Resource, Result, RoleCollection, Scope, Target, find_resource,
};

use super::{Diagnostic, Outcome};

/// Domain assumed by `role add` when no scope is given
pub const DEFAULT_DOMAIN: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentAction {
    Add,
    Remove,
}

impl AssignmentAction {
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Remove => "removed",
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct AssignmentArgs {
    /// Role name or ID
    pub role: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub struct TargetArgs {
    /// User name or ID
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Group name or ID
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,
}

impl TargetArgs {
    pub fn target(&self) -> Option<Target> {
        match (&self.user, &self.group) {
            (Some(user), _) => Some(Target::User(user.clone())),
            (None, Some(group)) => Some(Target::Group(group.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub struct ScopeArgs {
    /// Domain name or ID (add: defaults to "default" when no project is given)
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Project name or ID
    #[arg(long, value_name = "PROJECT")]
    pub project: Option<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> Option<Scope> {
        match (&self.domain, &self.project) {
            (Some(domain), _) => Some(Scope::Domain(domain.clone())),
            (None, Some(project)) => Some(Scope::Project(project.clone())),
            (None, None) => None,
        }
    }
}

/// Decide whether the given flags form a usable (target, scope) pair
///
/// `Add` falls back to the default domain when only a target is given;
/// `Remove` never defaults.
pub fn plan(
    action: AssignmentAction,
    target: Option<Target>,
    scope: Option<Scope>,
) -> std::result::Result<(Target, Scope), Diagnostic> {
    match (target, scope) {
        (None, None) => Err(Diagnostic::NoArguments(action)),
        (Some(target), Some(scope)) => Ok((target, scope)),
        (Some(target), None) if action == AssignmentAction::Add => {
            tracing::warn!(
                domain = DEFAULT_DOMAIN,
                "no --domain or --project given, assigning within the default domain"
            );
            Ok((target, Scope::Domain(DEFAULT_DOMAIN.to_string())))
        }
        _ => Err(Diagnostic::IncorrectArguments(action)),
    }
}

/// Look up a user or group and return it as a target carrying its ID
async fn resolve_target<S: IdentityService>(service: &S, target: &Target) -> Result<Target> {
    let entity = match target {
        Target::User(user) => find_resource(service.users(), user).await?,
        Target::Group(group) => find_resource(service.groups(), group).await?,
    };
    Ok(target.with_reference(entity.id()))
}

/// Look up a domain or project and return it as a scope carrying its ID
async fn resolve_scope<S: IdentityService>(service: &S, scope: &Scope) -> Result<Scope> {
    let entity = match scope {
        Scope::Domain(domain) => find_resource(service.domains(), domain).await?,
        Scope::Project(project) => find_resource(service.projects(), project).await?,
    };
    Ok(scope.with_reference(entity.id()))
}

/// Resolve role, target and scope, in that order, to IDs
async fn resolve<S: IdentityService>(
    service: &S,
    role: &str,
    target: &Target,
    scope: &Scope,
) -> Result<(String, Target, Scope)> {
    let role = find_resource(service.roles(), role).await?;
    let target = resolve_target(service, target).await?;
    let scope = resolve_scope(service, scope).await?;
    Ok((role.id, target, scope))
}

pub async fn add_assignment<S: IdentityService>(
    service: &S,
    args: AssignmentArgs,
) -> Result<Outcome> {
    tracing::debug!(?args, "add role assignment");

    let (target, scope) =
        match plan(AssignmentAction::Add, args.target.target(), args.scope.scope()) {
            Ok(pair) => pair,
            Err(diagnostic) => return Ok(Outcome::Skipped(diagnostic)),
        };

    let (role_id, target, scope) = resolve(service, &args.role, &target, &scope).await?;
    service.roles().grant(&role_id, &target, &scope).await?;
    Ok(Outcome::Done(()))
}

pub async fn remove_assignment<S: IdentityService>(
    service: &S,
    args: AssignmentArgs,
) -> Result<Outcome> {
    tracing::debug!(?args, "remove role assignment");

    let (target, scope) =
        match plan(AssignmentAction::Remove, args.target.target(), args.scope.scope()) {
            Ok(pair) => pair,
            Err(diagnostic) => return Ok(Outcome::Skipped(diagnostic)),
        };

    let (role_id, target, scope) = resolve(service, &args.role, &target, &scope).await?;
    service.roles().revoke(&role_id, &target, &scope).await?;
    Ok(Outcome::Done(()))
}
