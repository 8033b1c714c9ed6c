//! Hand-written `CloudClient` double for tests.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::core::client::cloud_client::CloudClient;
use crate::core::client::cloud_model::{
    ClusterInstallation, CloudGroup, GetClusterInstallationsRequest, GetInstallationRequest,
    GetInstallationsRequest, Installation,
};

/// Canned outcome for one mocked operation: `Err` holds the error message to return.
type Canned<T> = std::result::Result<T, String>;

fn replay<T: Clone>(canned: &Canned<T>) -> Result<T> {
    canned.clone().map_err(|message| anyhow!(message))
}

#[derive(Debug, Default, Clone)]
pub struct RecordedCalls {
    pub get_installation: Vec<(String, GetInstallationRequest)>,
    pub get_installations: Vec<GetInstallationsRequest>,
    pub get_cluster_installations: Vec<GetClusterInstallationsRequest>,
    pub exec: Vec<(String, String, Vec<String>)>,
    pub get_group: Vec<String>,
    /// Group lookups that ran to completion, recorded after any delay.
    pub answered_groups: Vec<String>,
}

pub struct MockCloudClient {
    pub installation: Canned<Option<Installation>>,
    pub installations: Canned<Vec<Installation>>,
    pub cluster_installations: Canned<Vec<ClusterInstallation>>,
    pub exec_output: Canned<Vec<u8>>,
    pub group: Canned<Option<CloudGroup>>,
    /// Delay applied before the group lookup answers.
    pub group_delay: Option<Duration>,
    /// Delay applied before the cluster installation listing answers.
    pub config_delay: Option<Duration>,
    pub calls: Mutex<RecordedCalls>,
}

impl Default for MockCloudClient {
    fn default() -> Self {
        Self {
            installation: Ok(None),
            installations: Ok(Vec::new()),
            cluster_installations: Ok(Vec::new()),
            exec_output: Ok(b"{}".to_vec()),
            group: Ok(None),
            group_delay: None,
            config_delay: None,
            calls: Mutex::new(RecordedCalls::default()),
        }
    }
}

impl MockCloudClient {
    pub fn calls(&self) -> RecordedCalls {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CloudClient for MockCloudClient {
    async fn get_installation(
        &self,
        id: &str,
        request: &GetInstallationRequest,
    ) -> Result<Option<Installation>> {
        self.calls
            .lock()
            .unwrap()
            .get_installation
            .push((id.to_string(), *request));
        replay(&self.installation)
    }

    async fn get_installations(
        &self,
        request: &GetInstallationsRequest,
    ) -> Result<Vec<Installation>> {
        self.calls
            .lock()
            .unwrap()
            .get_installations
            .push(request.clone());
        replay(&self.installations)
    }

    async fn get_cluster_installations(
        &self,
        request: &GetClusterInstallationsRequest,
    ) -> Result<Vec<ClusterInstallation>> {
        self.calls
            .lock()
            .unwrap()
            .get_cluster_installations
            .push(request.clone());
        if let Some(delay) = self.config_delay {
            tokio::time::sleep(delay).await;
        }
        replay(&self.cluster_installations)
    }

    async fn exec_cluster_installation_cli(
        &self,
        cluster_installation_id: &str,
        command: &str,
        args: &[String],
    ) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().exec.push((
            cluster_installation_id.to_string(),
            command.to_string(),
            args.to_vec(),
        ));
        replay(&self.exec_output)
    }

    async fn get_group(&self, id: &str) -> Result<Option<CloudGroup>> {
        self.calls.lock().unwrap().get_group.push(id.to_string());
        if let Some(delay) = self.group_delay {
            tokio::time::sleep(delay).await;
        }
        self.calls
            .lock()
            .unwrap()
            .answered_groups
            .push(id.to_string());
        replay(&self.group)
    }
}
