use std::sync::Arc;

use crate::core::client::cloud_client::CloudClient;
use crate::domain::workspace::errors::WorkspaceError;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> Result<$ret, WorkspaceError> {
                $path(self.cloud_client.clone(), $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub workspace_service: Arc<WorkspaceService>,
}

pub fn build_app_state(cloud_client: Arc<dyn CloudClient>) -> AppState {
    AppState {
        workspace_service: Arc::new(WorkspaceService::new(cloud_client)),
    }
}

#[derive(Clone)]
pub struct WorkspaceService {
    cloud_client: Arc<dyn CloudClient>,
}

impl WorkspaceService {
    pub fn new(cloud_client: Arc<dyn CloudClient>) -> Self {
        Self { cloud_client }
    }

    delegate_async_service! {
        fn list_workspaces(ctx: crate::core::context::request_context::RequestContext, filter: crate::domain::workspace::dto::workspace_list_request::WorkspaceListRequest) -> Vec<crate::domain::workspace::model::Workspace> => crate::domain::workspace::service::workspace_service::list_workspaces;
        fn get_workspace_detail(ctx: crate::core::context::request_context::RequestContext, workspace_id: String) -> Option<crate::domain::workspace::model::WorkspaceDetailed> => crate::domain::workspace::service::workspace_detail_service::fetch_workspace_detail;
    }
}
