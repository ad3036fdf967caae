// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role management commands
//!
//!   openstack role list
//!   openstack role show ROLE
//!   openstack role create NAME
//!   openstack role set ROLE --name NEW
//!   openstack role delete ROLE
//!   openstack role add ROLE (--user U | --group G) [--domain D | --project P]
//!   openstack role remove ROLE (--user U | --group G) (--domain D | --project P)
//!
//! Each action validates its arguments, resolves names to IDs and makes a
//! single change on the identity service. Argument combinations that make
//! no sense are reported as a one-line diagnostic and the action is skipped
//! without contacting the service.

mod assignment;
mod manage;

#[cfg(test)]
mod fake;

use std::fmt;

use anyhow::Result;
use clap::{Args, Subcommand};
use identity_client::{IdentityService, Role};

use crate::output::{json, table};

use assignment::{AssignmentAction, AssignmentArgs};
use manage::Listing;

#[derive(Subcommand, Clone, Debug)]
pub enum RoleCommand {
    /// Add a role to a user or group on a domain or project
    Add(AssignmentArgs),
    /// Create new role
    Create(RoleCreateArgs),
    /// Delete existing role
    #[command(alias = "rm")]
    Delete(RoleRefArgs),
    /// List roles
    #[command(alias = "ls")]
    List,
    /// Remove a role from a user or group on a domain or project
    Remove(AssignmentArgs),
    /// Rename a role
    #[command(alias = "rename")]
    Set(RoleSetArgs),
    /// Show role details
    Show(RoleRefArgs),
}

#[derive(Args, Clone, Debug)]
pub struct RoleCreateArgs {
    /// New role name
    #[arg(value_name = "ROLE_NAME")]
    pub name: String,
}

#[derive(Args, Clone, Debug)]
pub struct RoleRefArgs {
    /// Role name or ID
    pub role: String,
}

#[derive(Args, Clone, Debug)]
pub struct RoleSetArgs {
    /// Role name or ID
    pub role: String,
    /// New role name
    #[arg(long, value_name = "NEW_ROLE_NAME")]
    pub name: Option<String>,
}

/// Why an action declined to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// None of --user/--group/--domain/--project was given
    NoArguments(AssignmentAction),
    /// Flags were given but do not form a (target, scope) pair
    IncorrectArguments(AssignmentAction),
    /// `role set` without --name
    NothingToUpdate,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArguments(action) => {
                write!(f, "Role not {}, no arguments present", action.past_tense())
            }
            Self::IncorrectArguments(action) => write!(
                f,
                "Role not {}, incorrect set of arguments provided. \
                 See openstack --help for more details",
                action.past_tense()
            ),
            Self::NothingToUpdate => write!(f, "Role not updated, no arguments present"),
        }
    }
}

/// Result of an action that validates its input before acting
///
/// Remote failures are not represented here; they travel as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = ()> {
    /// The action ran
    Done(T),
    /// The action was skipped without contacting the service
    Skipped(Diagnostic),
}

impl RoleCommand {
    pub async fn run<S: IdentityService>(self, service: &S, use_json: bool) -> Result<()> {
        match self {
            Self::Add(args) => report(assignment::add_assignment(service, args).await?),
            Self::Remove(args) => report(assignment::remove_assignment(service, args).await?),
            Self::Create(args) => {
                let role = manage::create_role(service, &args.name).await?;
                print_role(&role, use_json)
            }
            Self::Delete(args) => {
                manage::delete_role(service, &args.role).await?;
                Ok(())
            }
            Self::List => {
                let roles = manage::list_roles(service).await?;
                if use_json {
                    json::print_json(&roles)
                } else {
                    print_listing(&Listing::from_roles(&roles));
                    Ok(())
                }
            }
            Self::Set(args) => {
                report(manage::rename_role(service, &args.role, args.name.as_deref()).await?)
            }
            Self::Show(args) => {
                let role = manage::show_role(service, &args.role).await?;
                print_role(&role, use_json)
            }
        }
    }
}

/// Write the diagnostic of a skipped action to stderr
fn report(outcome: Outcome) -> Result<()> {
    if let Outcome::Skipped(diagnostic) = outcome {
        eprintln!("{diagnostic}");
    }
    Ok(())
}

fn print_role(role: &Role, use_json: bool) -> Result<()> {
    if use_json {
        json::print_json(role)
    } else {
        table::print_table(table::fields_table(&role.fields()));
        Ok(())
    }
}

fn print_listing(listing: &Listing) {
    let mut tbl = table::create_table(&listing.columns);
    for row in &listing.rows {
        tbl.add_row(row.iter().map(String::as_str).collect::<Vec<_>>());
    }
    table::print_table(tbl);
}
