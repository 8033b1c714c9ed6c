use anyhow::{anyhow, Result};
use http::HeaderMap;
use reqwest::{Client, StatusCode};

use crate::domain::workspace::dto::workspace_list_request::WorkspaceListRequest;
use crate::domain::workspace::model::{Workspace, WorkspaceDetailed};

/// Programmatic interface to the pillar server API.
pub struct PillarClient {
    address: String,
    headers: HeaderMap,
    client: Client,
}

impl PillarClient {
    /// Creates a client to the pillar server at the given address.
    pub fn new(address: &str) -> Self {
        Self::with_headers(address, HeaderMap::new())
    }

    /// Creates a client that attaches `headers` to every request.
    pub fn with_headers(address: &str, headers: HeaderMap) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            headers,
            client: Client::new(),
        }
    }

    /// Lists workspaces that match the provided filter.
    pub async fn list_workspaces(&self, request: &WorkspaceListRequest) -> Result<Vec<Workspace>> {
        let url = format!("{}/api/v1/workspaces/list", self.address);
        let resp = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json().await?),
            status => Err(anyhow!("failed with status code {}", status.as_u16())),
        }
    }

    /// Fetches a single workspace with detailed data; `None` when it does not exist.
    pub async fn get_workspace(&self, id: &str) -> Result<Option<WorkspaceDetailed>> {
        let url = format!(
            "{}/api/v1/workspaces/{}",
            self.address,
            urlencoding::encode(id)
        );
        let resp = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(Some(resp.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(anyhow!("failed with status code {}", status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app_state::build_app_state;
    use crate::core::client::cloud_model::{ClusterInstallation, CloudGroup, Installation};
    use crate::core::client::mock_cloud_client::MockCloudClient;
    use crate::domain::workspace::model::Edition;
    use crate::routes::build_app;

    async fn serve(mock: MockCloudClient) -> String {
        let app = build_app(build_app_state(Arc::new(mock)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn list_workspaces_round_trip() {
        let address = serve(MockCloudClient {
            installations: Ok(vec![
                Installation {
                    id: "1234".into(),
                    dns: "joram.cloud.example.com".into(),
                    ..Default::default()
                },
                Installation {
                    id: "5678".into(),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        })
        .await;
        let client = PillarClient::new(&address);

        let workspaces = client
            .list_workspaces(&WorkspaceListRequest::default())
            .await
            .unwrap();

        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[0].id, "1234");
        assert_eq!(workspaces[0].dns, "joram.cloud.example.com");
        assert_eq!(workspaces[1].id, "5678");
    }

    #[tokio::test]
    async fn list_workspaces_error_reports_status() {
        let address = serve(MockCloudClient {
            installations: Err("some error".into()),
            ..Default::default()
        })
        .await;

        let err = PillarClient::new(&address)
            .list_workspaces(&WorkspaceListRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "failed with status code 500");
    }

    #[tokio::test]
    async fn get_workspace_round_trip() {
        let address = serve(MockCloudClient {
            installation: Ok(Some(Installation {
                id: "id1".into(),
                group_id: Some("g1".into()),
                ..Default::default()
            })),
            cluster_installations: Ok(vec![ClusterInstallation {
                id: "ci1".into(),
                ..Default::default()
            }]),
            exec_output: Ok(br#"{"ServiceSettings":{}}"#.to_vec()),
            group: Ok(Some(CloudGroup {
                id: "g1".into(),
                name: "n".into(),
                ..Default::default()
            })),
            ..Default::default()
        })
        .await;

        let detail = PillarClient::new(&address)
            .get_workspace("id1")
            .await
            .unwrap()
            .expect("workspace should exist");

        assert_eq!(detail.workspace.id, "id1");
        assert_eq!(detail.workspace.edition, Edition::Professional);
        assert_eq!(detail.group.unwrap().id, "g1");
        assert!(detail.config.contains_key("ServiceSettings"));
    }

    #[tokio::test]
    async fn get_workspace_missing_is_none() {
        let address = serve(MockCloudClient::default()).await;

        let detail = PillarClient::new(&address).get_workspace("ghost").await.unwrap();
        assert!(detail.is_none());
    }
}
