use std::sync::Arc;

use tracing::debug;

use crate::core::client::cloud_client::CloudClient;
use crate::core::context::request_context::RequestContext;
use crate::domain::workspace::dto::workspace_list_request::WorkspaceListRequest;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::mappers::map_installations_to_workspaces;
use crate::domain::workspace::model::Workspace;

/// Lists workspaces matching `filter`, in the order the provisioner returns them.
pub async fn list_workspaces(
    client: Arc<dyn CloudClient>,
    ctx: RequestContext,
    filter: WorkspaceListRequest,
) -> Result<Vec<Workspace>, WorkspaceError> {
    let installations = client
        .get_installations(&filter.to_installations_request())
        .await
        .map_err(WorkspaceError::ListInstallations)?;

    debug!(request = %ctx.request_id, "Listed {} workspace(s)", installations.len());
    Ok(map_installations_to_workspaces(&installations))
}
