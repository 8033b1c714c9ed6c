use anyhow::Result;
use async_trait::async_trait;

use crate::core::client::cloud_model::{
    ClusterInstallation, CloudGroup, GetClusterInstallationsRequest, GetInstallationRequest,
    GetInstallationsRequest, Installation,
};

/// Operations pillar needs from the cloud provisioning server.
///
/// Single-object lookups return `Ok(None)` when the provisioner reports the object missing.
#[async_trait]
pub trait CloudClient: Send + Sync {
    async fn get_installation(
        &self,
        id: &str,
        request: &GetInstallationRequest,
    ) -> Result<Option<Installation>>;

    async fn get_installations(&self, request: &GetInstallationsRequest)
        -> Result<Vec<Installation>>;

    async fn get_cluster_installations(
        &self,
        request: &GetClusterInstallationsRequest,
    ) -> Result<Vec<ClusterInstallation>>;

    /// Runs `command args...` inside the cluster installation and returns its raw output.
    async fn exec_cluster_installation_cli(
        &self,
        cluster_installation_id: &str,
        command: &str,
        args: &[String],
    ) -> Result<Vec<u8>>;

    async fn get_group(&self, id: &str) -> Result<Option<CloudGroup>>;
}
