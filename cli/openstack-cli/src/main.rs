// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenStack CLI - role management against the Identity v3 API

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use identity_client::Client;
use secrecy::SecretString;

mod commands;
mod config;
mod output;

use commands::RoleCommand;
use config::Overrides;

#[derive(Parser)]
#[command(
    name = "openstack",
    version,
    about = "OpenStack identity role management",
    long_about = "Create, rename, show, list and delete roles, and grant or revoke them \
                  on users and groups within domains and projects"
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Connection options, each also read from its OS_* variable
#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Named profile from the config directory
    #[arg(long = "os-cloud", global = true, env = "OS_CLOUD")]
    cloud: Option<String>,

    /// Identity v3 URL
    #[arg(long = "os-auth-url", global = true, env = "OS_AUTH_URL")]
    auth_url: Option<String>,

    /// Endpoint override (use with --os-token)
    #[arg(long = "os-url", global = true, env = "OS_URL")]
    url: Option<String>,

    /// Pre-issued authentication token
    #[arg(
        long = "os-token",
        global = true,
        env = "OS_TOKEN",
        hide_env_values = true,
        value_parser = parse_secret
    )]
    token: Option<SecretString>,

    /// Authentication username
    #[arg(long = "os-username", global = true, env = "OS_USERNAME")]
    username: Option<String>,

    /// Authentication password
    #[arg(
        long = "os-password",
        global = true,
        env = "OS_PASSWORD",
        hide_env_values = true,
        value_parser = parse_secret
    )]
    password: Option<SecretString>,

    /// Domain of the authenticating user
    #[arg(long = "os-user-domain-name", global = true, env = "OS_USER_DOMAIN_NAME")]
    user_domain_name: Option<String>,

    /// Project to scope the token to
    #[arg(long = "os-project-name", global = true, env = "OS_PROJECT_NAME")]
    project_name: Option<String>,

    /// Domain of the scoping project
    #[arg(long = "os-project-domain-name", global = true, env = "OS_PROJECT_DOMAIN_NAME")]
    project_domain_name: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "OS_INSECURE")]
    insecure: bool,
}

fn parse_secret(value: &str) -> Result<SecretString, std::convert::Infallible> {
    Ok(SecretString::from(value))
}

#[derive(Subcommand)]
enum Commands {
    /// Manage roles and role assignments
    Role {
        #[command(subcommand)]
        command: RoleCommand,
    },
}

impl Cli {
    /// Build an identity client from the resolved profile
    ///
    /// No request is made until a command needs one.
    fn build_client(&self) -> Result<Client> {
        let c = &self.connection;
        let overrides = Overrides {
            auth_url: c.auth_url.clone(),
            url: c.url.clone(),
            token: c.token.clone(),
            username: c.username.clone(),
            password: c.password.clone(),
            user_domain_name: c.user_domain_name.clone(),
            project_name: c.project_name.clone(),
            project_domain_name: c.project_domain_name.clone(),
            insecure: c.insecure,
        };

        let profile = config::resolve_profile(c.cloud.as_deref(), &overrides)?;
        Ok(Client::new(profile.to_auth_config()?)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; warnings always reach stderr, debug only with -v
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter("openstack_cli=debug,identity_client=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter("openstack_cli=warn,identity_client=warn")
            .without_time()
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Role { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
    }
}
