/// Maps provisioner wire types → workspace domain models
use crate::core::client::cloud_model::{CloudGroup, Installation};
use crate::domain::workspace::model::{Edition, Group, Workspace};

pub fn map_installation_to_workspace(installation: &Installation) -> Workspace {
    Workspace {
        id: installation.id.clone(),
        group_id: installation.group_id.clone().unwrap_or_default(),
        version: installation.version.clone(),
        dns: installation.dns.clone(),
        size: installation.size.clone(),
        database: installation.database.clone(),
        filestore: installation.filestore.clone(),
        create_at: installation.create_at,
        delete_at: installation.delete_at,
        edition: Edition::from_affinity(&installation.affinity),
    }
}

pub fn map_installations_to_workspaces(installations: &[Installation]) -> Vec<Workspace> {
    installations
        .iter()
        .map(map_installation_to_workspace)
        .collect()
}

pub fn map_cloud_group_to_group(group: CloudGroup) -> Group {
    Group {
        id: group.id,
        name: group.name,
        description: group.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::cloud_model::InstallationAffinity;

    #[test]
    fn isolated_affinity_is_enterprise_everything_else_professional() {
        let cases = [
            (InstallationAffinity::Isolated, Edition::Enterprise),
            (InstallationAffinity::MultiTenant, Edition::Professional),
            (InstallationAffinity::Unknown, Edition::Professional),
        ];
        for (affinity, expected) in cases {
            let installation = Installation {
                affinity,
                ..Default::default()
            };
            assert_eq!(map_installation_to_workspace(&installation).edition, expected);
        }
    }

    #[test]
    fn missing_group_id_becomes_empty_string() {
        let installation = Installation {
            id: "inst".into(),
            dns: "inst.cloud.example.com".into(),
            create_at: 10,
            ..Default::default()
        };
        let workspace = map_installation_to_workspace(&installation);
        assert_eq!(workspace.group_id, "");
        assert_eq!(workspace.dns, "inst.cloud.example.com");
        assert_eq!(workspace.create_at, 10);
    }

    #[test]
    fn workspace_serializes_edition_label() {
        let workspace = map_installation_to_workspace(&Installation {
            affinity: InstallationAffinity::Isolated,
            ..Default::default()
        });
        let value = serde_json::to_value(&workspace).unwrap();
        assert_eq!(value["edition"], "Cloud Enterprise");
        assert_eq!(value["group_id"], "");
    }
}
