use axum::Json;

use crate::domain::workspace::errors::WorkspaceError;
use crate::errors::{internal_error, AppError};

pub fn to_json<T: serde::Serialize>(
    result: Result<T, WorkspaceError>
) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => Err(internal_error(err)), // preserves original error string
    }
}
