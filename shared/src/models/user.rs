//! User Model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::permission::PermissionRef;

/// Distinguished role that bypasses all permission checks
pub const ADMIN_ROLE: &str = "admin";

/// Group reference as embedded in a user snapshot
///
/// A trimmed view of the group, carrying only what permission resolution
/// needs. The full entity lives in [`super::group::PermissionGroup`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Permission bundle of the group (either entry shape)
    #[serde(default)]
    pub permissions: Vec<PermissionRef>,
}

/// User snapshot (from `GET /auth/me` or the aggregated permission view)
///
/// Owned by the external auth/user service; the console only reads it.
/// A freshly fetched snapshot is the sole input per permission evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    /// Role name; [`ADMIN_ROLE`] is a universal override
    pub role: String,
    /// Legacy flat grant map (key -> granted)
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
    /// Individually granted permissions outside any group
    #[serde(default)]
    pub direct_permissions: Vec<PermissionRef>,
    /// Group memberships with their permission bundles
    #[serde(default)]
    pub permission_groups: Vec<GroupRef>,
}

impl User {
    /// Whether this user holds the admin override role
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_snapshot_decodes_wire_shape() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-17",
                "username": "rania",
                "role": "employee",
                "permissions": {"employees.view": true},
                "directPermissions": ["documents.view", {"key": "reports.view"}],
                "permissionGroups": [
                    {"id": "g-1", "name": "HR Clerks", "permissions": [{"key": "vacations.view"}]}
                ]
            }"#,
        )
        .expect("Failed to parse user snapshot");

        assert!(!user.is_admin());
        assert_eq!(user.permissions.get("employees.view"), Some(&true));
        assert_eq!(user.direct_permissions.len(), 2);
        assert_eq!(user.permission_groups[0].permissions[0].key(), "vacations.view");
    }

    #[test]
    fn test_user_snapshot_defaults_missing_grant_lists() {
        let user: User = serde_json::from_str(r#"{"id": "u-1", "role": "employee"}"#)
            .expect("Failed to parse minimal user snapshot");

        assert!(user.permissions.is_empty());
        assert!(user.direct_permissions.is_empty());
        assert!(user.permission_groups.is_empty());
    }
}
