use thiserror::Error;
use tokio::task::JoinError;

/// Failures of the workspace service operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to list installations: {0}")]
    ListInstallations(#[source] anyhow::Error),

    #[error("failed to get installation {id}: {source}")]
    GetInstallation {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to list cluster installations for workspace {id}: {source}")]
    ListClusterInstallations {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("workspace {0} does not have a cluster installation")]
    NoClusterInstallation(String),

    #[error("failed to run config command on cluster installation {id}: {source}")]
    ExecConfigCommand {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to decode config of cluster installation {id}: {source}")]
    DecodeConfig {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to get group {id}: {source}")]
    GetGroup {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{branch} lookup did not complete: {source}")]
    BranchAborted {
        branch: &'static str,
        #[source]
        source: JoinError,
    },
}
