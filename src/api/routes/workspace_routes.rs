//! Workspace routes (e.g., /api/v1/workspaces/*)

use axum::{routing::{get, post}, Router};
use crate::api::controller::workspace::WorkspaceController;
use crate::app_state::AppState;

pub fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/list", post(WorkspaceController::list_workspaces))
        .route("/{workspace}", get(WorkspaceController::get_workspace))
}
