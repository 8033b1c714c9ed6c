use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::client::cloud_model::InstallationAffinity;

/// Paid cloud edition of a workspace, derived from installation affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edition {
    #[serde(rename = "Cloud Professional")]
    Professional,
    #[serde(rename = "Cloud Enterprise")]
    Enterprise,
}

impl Edition {
    pub fn from_affinity(affinity: &InstallationAffinity) -> Self {
        match affinity {
            InstallationAffinity::Isolated => Edition::Enterprise,
            _ => Edition::Professional,
        }
    }
}

/// An installation without sensitive fields, shaped for the support team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub group_id: String,
    pub version: String,
    pub dns: String,
    pub size: String,
    pub database: String,
    pub filestore: String,
    pub create_at: i64,
    pub delete_at: i64,
    pub edition: Edition,
}

/// An installation group without sensitive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Live configuration dumped from a running workspace, keyed by settings section.
pub type RuntimeConfig = Map<String, Value>;

/// A workspace together with its group and live configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDetailed {
    #[serde(flatten)]
    pub workspace: Workspace,
    pub group: Option<Group>,
    pub config: RuntimeConfig,
}
