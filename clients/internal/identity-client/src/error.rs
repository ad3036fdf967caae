// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for identity-client

use thiserror::Error;

use crate::types::ResourceKind;

/// Errors that can occur while talking to the identity service
#[derive(Error, Debug)]
pub enum Error {
    /// No resource matched the given name or ID
    #[error("No {kind} with a name or ID of '{name_or_id}' exists.")]
    NotFound {
        kind: ResourceKind,
        name_or_id: String,
    },

    /// More than one resource carries the given name
    #[error("More than one {kind} exists with the name '{name}'.")]
    NoUniqueMatch { kind: ResourceKind, name: String },

    /// The service answered with a non-success status
    #[error("{method} {path} failed ({status}): {message}")]
    Api {
        method: String,
        path: String,
        status: u16,
        message: String,
    },

    /// Token request was rejected or returned no token
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True when the service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Api { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// True when a direct fetch by ID was answered but did not find the
    /// resource, so a search by name is worth trying
    ///
    /// Rejected credentials and transport failures are not misses.
    pub fn is_lookup_miss(&self) -> bool {
        match self {
            Self::Api { status, .. } => (400..500).contains(status) && *status != 401,
            _ => self.is_not_found(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
