//! Permission Group Model

use serde::{Deserialize, Serialize};

use super::permission::Permission;

/// Permission group entity (populated view from `GET /permissions/groups`)
///
/// A reusable bundle of permissions; membership is many-to-many with users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// Group member (user reference)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// Create group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    pub description: Option<String>,
    /// Permission keys bundled by the new group
    pub permissions: Vec<String>,
}

/// Update group payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Full replacement of the group's permission key set
    pub permissions: Option<Vec<String>>,
}

/// Membership payload for add-user / remove-user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub user_id: String,
    pub group_id: String,
}
