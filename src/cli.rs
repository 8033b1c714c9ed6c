//! CLI argument parsing with clap derive

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::core::client::pillar_client::PillarClient;
use crate::domain::workspace::dto::workspace_list_request::WorkspaceListRequest;

pub const DEFAULT_LOCAL_SERVER_API: &str = "http://localhost:8078";

/// Pillar is a service for customer support to view cloud workspaces.
#[derive(Parser, Debug)]
#[command(name = "pillar", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Server options used when no subcommand is given
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the customer web server
    Server(ServerArgs),

    /// View workspaces
    Workspace(WorkspaceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// The interface and port on which to listen on the API
    #[arg(long, env = "PILLAR_LISTEN", default_value = ":8078")]
    pub listen: String,

    /// Whether to output debug logs
    #[arg(long, env = "PILLAR_DEBUG")]
    pub debug: bool,

    /// Set to run in dev mode
    #[arg(long, env = "PILLAR_DEV")]
    pub dev: bool,

    /// Endpoint where the cloud provisioning server can be reached
    /// (include the scheme and port number)
    #[arg(long, env = "PILLAR_CLOUD_URL")]
    pub cloud_url: Option<String>,

    /// Per-request timeout for calls to the provisioning server, in seconds
    #[arg(long, env = "PILLAR_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
pub struct WorkspaceArgs {
    /// The pillar server whose API will be queried
    #[arg(long, env = "PILLAR_SERVER", default_value = DEFAULT_LOCAL_SERVER_API, global = true)]
    pub server: String,

    #[command(subcommand)]
    pub command: WorkspaceCommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceCommand {
    /// List workspaces
    List(WorkspaceListArgs),

    /// Get a workspace
    Get(WorkspaceGetArgs),
}

#[derive(Args, Debug)]
pub struct WorkspaceListArgs {
    /// The owner by which to filter workspaces
    #[arg(long)]
    pub owner: Option<String>,

    /// The group ID by which to filter workspaces
    #[arg(long)]
    pub group: Option<String>,

    /// The page of workspaces to fetch, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// The number of workspaces to fetch per page, or -1 for all of them
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub per_page: i32,

    /// Whether to include deleted workspaces
    #[arg(long)]
    pub include_deleted: bool,

    /// The dns to filter results by
    #[arg(long)]
    pub dns: Option<String>,
}

impl From<WorkspaceListArgs> for WorkspaceListRequest {
    fn from(args: WorkspaceListArgs) -> Self {
        WorkspaceListRequest {
            owner: args.owner,
            group: args.group,
            dns: args.dns,
            page: Some(args.page),
            per_page: Some(args.per_page),
            include_deleted: args.include_deleted,
        }
    }
}

#[derive(Args, Debug)]
pub struct WorkspaceGetArgs {
    /// ID of the workspace to get
    #[arg(long)]
    pub id: String,
}

impl Cli {
    /// Whether debug logging was requested for a server run.
    pub fn debug_enabled(&self) -> bool {
        match &self.command {
            Some(Command::Server(args)) => args.debug,
            Some(Command::Workspace(_)) => false,
            None => self.server.debug,
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            None => crate::server::run_server(ServerConfig::from_args(&self.server)?).await,
            Some(Command::Server(args)) => {
                crate::server::run_server(ServerConfig::from_args(&args)?).await
            }
            Some(Command::Workspace(args)) => run_workspace(args).await,
        }
    }
}

async fn run_workspace(args: WorkspaceArgs) -> Result<()> {
    let client = PillarClient::new(&args.server);

    match args.command {
        WorkspaceCommand::List(list) => {
            let workspaces = client
                .list_workspaces(&list.into())
                .await
                .context("failed to query workspaces")?;
            print_json(&workspaces)
        }
        WorkspaceCommand::Get(get) => {
            let workspace = client
                .get_workspace(&get.id)
                .await
                .context("failed to fetch workspace")?
                .ok_or_else(|| anyhow!("workspace {} not found", get.id))?;
            print_json(&workspace)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
