//! Workspace controller: connects routes to workspace usecases

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use tracing::{info_span, Instrument};
use validator::Validate;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::context::request_context::RequestContext;
use crate::domain::workspace::dto::workspace_list_request::WorkspaceListRequest;
use crate::domain::workspace::model::Workspace;
use crate::errors::{internal_error, AppError};

pub struct WorkspaceController;

impl WorkspaceController {
    /// List workspaces matching the filter in the body; an empty body lists without filters.
    pub async fn list_workspaces(
        State(state): State<AppState>,
        Extension(ctx): Extension<RequestContext>,
        body: Bytes,
    ) -> Result<Json<Vec<Workspace>>, AppError> {
        let filter = parse_list_request(&body)?;
        filter
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        to_json(state.workspace_service.list_workspaces(ctx, filter).await)
    }

    /// Get one workspace with its group and live config; 404 with no body when it does not exist.
    pub async fn get_workspace(
        State(state): State<AppState>,
        Extension(ctx): Extension<RequestContext>,
        Path(workspace_id): Path<String>,
    ) -> Result<Response, AppError> {
        let span = info_span!("workspace", workspace = %workspace_id);

        match state
            .workspace_service
            .get_workspace_detail(ctx, workspace_id)
            .instrument(span)
            .await
        {
            Ok(Some(detail)) => Ok(Json(detail).into_response()),
            Ok(None) => Ok(StatusCode::NOT_FOUND.into_response()),
            Err(err) => Err(internal_error(err)),
        }
    }
}

fn parse_list_request(body: &[u8]) -> Result<WorkspaceListRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(WorkspaceListRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::BodyParsingError(e.to_string()))
}
