use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::core::client::cloud_model::GetInstallationsRequest;

/// `per_page` value asking the provisioner for every result in one page.
pub const ALL_PAGES: i32 = -1;

/// Filter payload for listing workspaces.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WorkspaceListRequest {
    #[serde(alias = "OwnerID")]
    pub owner: Option<String>,
    #[serde(alias = "GroupID")]
    pub group: Option<String>,
    #[serde(alias = "DNS")]
    pub dns: Option<String>,
    #[serde(alias = "Page")]
    pub page: Option<u32>,
    #[serde(alias = "PerPage")]
    #[validate(range(min = ALL_PAGES, max = 1000))]
    pub per_page: Option<i32>,
    #[serde(alias = "IncludeDeleted")]
    pub include_deleted: bool,
}

impl WorkspaceListRequest {
    /// Provisioner query for this filter; group configuration is always requested.
    pub fn to_installations_request(&self) -> GetInstallationsRequest {
        GetInstallationsRequest {
            owner: self.owner.clone().filter(|s| !s.is_empty()),
            group: self.group.clone().filter(|s| !s.is_empty()),
            dns: self.dns.clone().filter(|s| !s.is_empty()),
            page: self.page,
            per_page: self.per_page,
            include_deleted: self.include_deleted,
            include_group_config: true,
            include_group_config_overrides: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_an_unfiltered_request() {
        let req: WorkspaceListRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, WorkspaceListRequest::default());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn accepts_provisioner_style_field_names() {
        let req: WorkspaceListRequest = serde_json::from_value(json!({
            "OwnerID": "owner1",
            "PerPage": 50,
            "IncludeDeleted": true
        }))
        .unwrap();
        assert_eq!(req.owner.as_deref(), Some("owner1"));
        assert_eq!(req.per_page, Some(50));
        assert!(req.include_deleted);
    }

    #[test]
    fn per_page_out_of_range_is_rejected() {
        let req = WorkspaceListRequest {
            per_page: Some(5000),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn all_pages_is_forwarded_upstream() {
        let req = WorkspaceListRequest {
            per_page: Some(ALL_PAGES),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.to_installations_request().per_page, Some(-1));

        let below = WorkspaceListRequest {
            per_page: Some(-2),
            ..Default::default()
        };
        assert!(below.validate().is_err());
    }

    #[test]
    fn blank_filters_are_dropped_from_upstream_query() {
        let req = WorkspaceListRequest {
            owner: Some(String::new()),
            dns: Some("acme.cloud.example.com".into()),
            ..Default::default()
        };
        let upstream = req.to_installations_request();
        assert_eq!(upstream.owner, None);
        assert_eq!(upstream.dns.as_deref(), Some("acme.cloud.example.com"));
        assert!(upstream.include_group_config);
    }
}
