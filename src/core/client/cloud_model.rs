//! Wire types of the cloud provisioning server.
//! Field names follow the provisioner's JSON (PascalCase, `ID`/`DNS` acronyms).
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Isolation policy of an installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InstallationAffinity {
    #[default]
    #[serde(rename = "multitenant")]
    MultiTenant,
    #[serde(rename = "isolated")]
    Isolated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Installation {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "OwnerID")]
    pub owner_id: String,
    #[serde(rename = "GroupID")]
    pub group_id: Option<String>,
    pub version: String,
    pub image: String,
    #[serde(rename = "DNS")]
    pub dns: String,
    pub database: String,
    pub filestore: String,
    pub size: String,
    pub affinity: InstallationAffinity,
    pub state: String,
    pub create_at: i64,
    pub delete_at: i64,
}

impl Installation {
    /// Group id, treating an empty string the same as no group.
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterInstallation {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ClusterID")]
    pub cluster_id: String,
    #[serde(rename = "InstallationID")]
    pub installation_id: String,
    pub namespace: String,
    pub state: String,
    pub create_at: i64,
    pub delete_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CloudGroup {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub sequence: i64,
    pub create_at: i64,
    pub delete_at: i64,
}

/// Query options for a single installation lookup.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetInstallationRequest {
    pub include_group_config: bool,
    pub include_group_config_overrides: bool,
}

/// Query filter for listing installations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetInstallationsRequest {
    pub owner: Option<String>,
    pub group: Option<String>,
    pub dns: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<i32>,
    pub include_deleted: bool,
    pub include_group_config: bool,
    pub include_group_config_overrides: bool,
}

/// Query filter for listing cluster installations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetClusterInstallationsRequest {
    pub installation: Option<String>,
    pub cluster: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<i32>,
    pub include_deleted: bool,
}
