use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::client::cloud_client::CloudClient;
use crate::core::client::cloud_model::{
    ClusterInstallation, CloudGroup, GetClusterInstallationsRequest, GetInstallationRequest,
    GetInstallationsRequest, Installation,
};

/// HTTP client for the cloud provisioning server API.
#[derive(Clone)]
pub struct ProvisionerClient {
    address: String,
    client: Client,
}

impl ProvisionerClient {
    /// Creates a client for the provisioner at `address` (scheme and port included).
    /// `timeout` bounds each upstream request; `None` leaves requests unbounded.
    pub fn new(address: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .context("failed to reach cloud provisioner")?;
        Ok(response)
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn status_error(status: StatusCode) -> anyhow::Error {
    anyhow!("failed with status code {}", status.as_u16())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    match response.status() {
        StatusCode::OK => Ok(response.json().await?),
        status => Err(status_error(status)),
    }
}

async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    match response.status() {
        StatusCode::OK => Ok(Some(response.json().await?)),
        StatusCode::NOT_FOUND => Ok(None),
        status => Err(status_error(status)),
    }
}

#[async_trait]
impl CloudClient for ProvisionerClient {
    async fn get_installation(
        &self,
        id: &str,
        request: &GetInstallationRequest,
    ) -> Result<Option<Installation>> {
        let url = self.url(&format!("/api/installation/{}", segment(id)));
        let response = self.send(self.client.get(&url).query(request)).await?;

        debug!("Fetched installation '{}' ({})", id, response.status());
        decode_optional(response).await
    }

    async fn get_installations(
        &self,
        request: &GetInstallationsRequest,
    ) -> Result<Vec<Installation>> {
        let url = self.url("/api/installations");
        let response = self.send(self.client.get(&url).query(request)).await?;

        let installations: Vec<Installation> = decode(response).await?;
        debug!("Discovered {} installation(s)", installations.len());
        Ok(installations)
    }

    async fn get_cluster_installations(
        &self,
        request: &GetClusterInstallationsRequest,
    ) -> Result<Vec<ClusterInstallation>> {
        let url = self.url("/api/cluster_installations");
        let response = self.send(self.client.get(&url).query(request)).await?;

        let cluster_installations: Vec<ClusterInstallation> = decode(response).await?;
        debug!(
            "Discovered {} cluster installation(s)",
            cluster_installations.len()
        );
        Ok(cluster_installations)
    }

    async fn exec_cluster_installation_cli(
        &self,
        cluster_installation_id: &str,
        command: &str,
        args: &[String],
    ) -> Result<Vec<u8>> {
        let url = self.url(&format!(
            "/api/cluster_installation/{}/exec/{}",
            segment(cluster_installation_id),
            segment(command)
        ));
        let response = self.send(self.client.post(&url).json(args)).await?;

        match response.status() {
            StatusCode::OK => {
                let output = response.bytes().await?;
                debug!(
                    "Executed '{}' on cluster installation '{}' ({} bytes)",
                    command,
                    cluster_installation_id,
                    output.len()
                );
                Ok(output.to_vec())
            }
            status => Err(status_error(status)),
        }
    }

    async fn get_group(&self, id: &str) -> Result<Option<CloudGroup>> {
        let url = self.url(&format!("/api/group/{}", segment(id)));
        let response = self.send(self.client.get(&url)).await?;

        debug!("Fetched group '{}' ({})", id, response.status());
        decode_optional(response).await
    }
}
