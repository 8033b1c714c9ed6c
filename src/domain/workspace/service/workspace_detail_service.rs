use std::sync::Arc;

use tracing::{debug, Instrument};

use crate::core::client::cloud_client::CloudClient;
use crate::core::client::cloud_model::{GetClusterInstallationsRequest, GetInstallationRequest};
use crate::core::context::request_context::RequestContext;
use crate::core::util::task_util::ScopedTask;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::mappers::{map_cloud_group_to_group, map_installation_to_workspace};
use crate::domain::workspace::model::{Group, RuntimeConfig, WorkspaceDetailed};

/// Upper bound on cluster installations requested per workspace.
pub const CLUSTER_INSTALLATION_PAGE_SIZE: i32 = 1000;

pub const CONFIG_COMMAND: &str = "mmctl";
pub const CONFIG_COMMAND_ARGS: [&str; 3] = ["config", "show", "--local"];

/// Fetches a workspace with its group and live configuration.
///
/// The installation is looked up first; `Ok(None)` means it does not exist. The config and
/// group lookups then run as two independent tasks and are both awaited before results are
/// inspected. Errors are checked config first, then group, so when both fail only the config
/// error is returned. Dropping the returned future cancels any branch still in flight.
pub async fn fetch_workspace_detail(
    client: Arc<dyn CloudClient>,
    ctx: RequestContext,
    workspace_id: String,
) -> Result<Option<WorkspaceDetailed>, WorkspaceError> {
    let request = GetInstallationRequest {
        include_group_config: true,
        include_group_config_overrides: false,
    };
    let installation = client
        .get_installation(&workspace_id, &request)
        .await
        .map_err(|source| WorkspaceError::GetInstallation {
            id: workspace_id.clone(),
            source,
        })?;

    let Some(installation) = installation else {
        debug!(request = %ctx.request_id, workspace = %workspace_id, "Installation not found");
        return Ok(None);
    };

    // Both branches are aborted if this future is dropped before they finish.
    let config_task = ScopedTask::spawn(
        fetch_runtime_config(client.clone(), installation.id.clone()).in_current_span(),
    );
    let group_task = ScopedTask::spawn(
        fetch_group(client, installation.group_id().map(str::to_owned)).in_current_span(),
    );

    let (config_outcome, group_outcome) = tokio::join!(config_task, group_task);

    let config = config_outcome.map_err(|source| WorkspaceError::BranchAborted {
        branch: "config",
        source,
    })??;
    let group = group_outcome.map_err(|source| WorkspaceError::BranchAborted {
        branch: "group",
        source,
    })??;

    debug!(
        request = %ctx.request_id,
        workspace = %workspace_id,
        has_group = group.is_some(),
        config_sections = config.len(),
        "Assembled workspace detail"
    );

    Ok(Some(WorkspaceDetailed {
        workspace: map_installation_to_workspace(&installation),
        group,
        config,
    }))
}

/// Dumps the live configuration of the first cluster installation of `installation_id`.
async fn fetch_runtime_config(
    client: Arc<dyn CloudClient>,
    installation_id: String,
) -> Result<RuntimeConfig, WorkspaceError> {
    let request = GetClusterInstallationsRequest {
        installation: Some(installation_id.clone()),
        per_page: Some(CLUSTER_INSTALLATION_PAGE_SIZE),
        ..Default::default()
    };
    let cluster_installations = client
        .get_cluster_installations(&request)
        .await
        .map_err(|source| WorkspaceError::ListClusterInstallations {
            id: installation_id.clone(),
            source,
        })?;

    let cluster_installation = cluster_installations
        .into_iter()
        .next()
        .ok_or(WorkspaceError::NoClusterInstallation(installation_id))?;

    get_config_for_cluster_installation(client.as_ref(), &cluster_installation.id).await
}

pub async fn get_config_for_cluster_installation(
    client: &dyn CloudClient,
    cluster_installation_id: &str,
) -> Result<RuntimeConfig, WorkspaceError> {
    let args: Vec<String> = CONFIG_COMMAND_ARGS.iter().map(|s| s.to_string()).collect();
    let output = client
        .exec_cluster_installation_cli(cluster_installation_id, CONFIG_COMMAND, &args)
        .await
        .map_err(|source| WorkspaceError::ExecConfigCommand {
            id: cluster_installation_id.to_string(),
            source,
        })?;

    serde_json::from_slice(&output).map_err(|source| WorkspaceError::DecodeConfig {
        id: cluster_installation_id.to_string(),
        source,
    })
}

/// `Ok(None)` when there is no group id or the provisioner has no such group.
async fn fetch_group(
    client: Arc<dyn CloudClient>,
    group_id: Option<String>,
) -> Result<Option<Group>, WorkspaceError> {
    let Some(group_id) = group_id else {
        return Ok(None);
    };

    let group = client
        .get_group(&group_id)
        .await
        .map_err(|source| WorkspaceError::GetGroup {
            id: group_id.clone(),
            source,
        })?;

    Ok(group.map(map_cloud_group_to_group))
}
