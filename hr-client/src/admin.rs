//! Permission administration API
//!
//! Typed wrappers for the permission administration surface. Mutating calls
//! do not reconcile any local state: after a successful mutation the caller
//! re-fetches the affected user's aggregated view ([`HttpClient::user_permissions`])
//! instead of computing the union locally.

use shared::client::{SetUserPermissions, UserPermissionsView};
use shared::models::{
    GroupCreate, GroupMembership, GroupUpdate, Permission, PermissionCreate, PermissionGroup,
    PermissionUpdate,
};
use tracing::info;

use crate::{ApiResponse, ClientResult, HttpClient};

impl HttpClient {
    // ========== Permission definition API ==========

    /// List all permission definitions
    pub async fn list_permissions(&self) -> ClientResult<Vec<Permission>> {
        let resp = self
            .get::<ApiResponse<Vec<Permission>>>("/permissions")
            .await?;
        Self::unwrap_envelope(resp, "permission list")
    }

    /// Create a permission definition
    pub async fn create_permission(&self, input: &PermissionCreate) -> ClientResult<Permission> {
        let resp = self
            .post::<ApiResponse<Permission>, _>("/permissions", input)
            .await?;
        let permission = Self::unwrap_envelope(resp, "permission")?;
        info!(key = %permission.key, "Created permission");
        Ok(permission)
    }

    /// Update a permission definition
    ///
    /// The `key` itself is immutable once referenced by any grant; only the
    /// display metadata can change.
    pub async fn update_permission(
        &self,
        id: &str,
        input: &PermissionUpdate,
    ) -> ClientResult<Permission> {
        let resp = self
            .put::<ApiResponse<Permission>, _>(&format!("/permissions/{}", id), input)
            .await?;
        let permission = Self::unwrap_envelope(resp, "permission")?;
        info!(key = %permission.key, "Updated permission");
        Ok(permission)
    }

    /// Delete a permission definition
    pub async fn delete_permission(&self, id: &str) -> ClientResult<()> {
        let resp = self
            .delete::<ApiResponse<()>>(&format!("/permissions/{}", id))
            .await?;
        Self::check_envelope(resp)?;
        info!(id, "Deleted permission");
        Ok(())
    }

    // ========== Permission group API ==========

    /// List all permission groups with populated permissions and members
    pub async fn list_groups(&self) -> ClientResult<Vec<PermissionGroup>> {
        let resp = self
            .get::<ApiResponse<Vec<PermissionGroup>>>("/permissions/groups")
            .await?;
        Self::unwrap_envelope(resp, "group list")
    }

    /// Create a permission group
    pub async fn create_group(&self, input: &GroupCreate) -> ClientResult<PermissionGroup> {
        let resp = self
            .post::<ApiResponse<PermissionGroup>, _>("/permissions/groups", input)
            .await?;
        let group = Self::unwrap_envelope(resp, "group")?;
        info!(group_id = %group.id, name = %group.name, "Created permission group");
        Ok(group)
    }

    /// Update a permission group (name, description, permission set)
    pub async fn update_group(
        &self,
        id: &str,
        input: &GroupUpdate,
    ) -> ClientResult<PermissionGroup> {
        let resp = self
            .put::<ApiResponse<PermissionGroup>, _>(&format!("/permissions/groups/{}", id), input)
            .await?;
        let group = Self::unwrap_envelope(resp, "group")?;
        info!(group_id = %group.id, "Updated permission group");
        Ok(group)
    }

    /// Delete a permission group
    pub async fn delete_group(&self, id: &str) -> ClientResult<()> {
        let resp = self
            .delete::<ApiResponse<()>>(&format!("/permissions/groups/{}", id))
            .await?;
        Self::check_envelope(resp)?;
        info!(group_id = id, "Deleted permission group");
        Ok(())
    }

    /// Add a user to a group
    pub async fn add_group_user(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let membership = GroupMembership {
            user_id: user_id.to_string(),
            group_id: group_id.to_string(),
        };

        let resp = self
            .post::<ApiResponse<()>, _>("/permissions/groups/add-user", &membership)
            .await?;
        Self::check_envelope(resp)?;
        info!(user_id, group_id, "Added user to permission group");
        Ok(())
    }

    /// Remove a user from a group
    pub async fn remove_group_user(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let membership = GroupMembership {
            user_id: user_id.to_string(),
            group_id: group_id.to_string(),
        };

        let resp = self
            .post::<ApiResponse<()>, _>("/permissions/groups/remove-user", &membership)
            .await?;
        Self::check_envelope(resp)?;
        info!(user_id, group_id, "Removed user from permission group");
        Ok(())
    }

    // ========== Per-user grant API ==========

    /// Fetch the server-computed aggregated permission view for a user
    pub async fn user_permissions(&self, user_id: &str) -> ClientResult<UserPermissionsView> {
        let resp = self
            .get::<ApiResponse<UserPermissionsView>>(&format!(
                "/permissions/user/{}/permissions",
                user_id
            ))
            .await?;
        Self::unwrap_envelope(resp, "aggregated permission view")
    }

    /// Replace a user's direct permission set wholesale
    ///
    /// The whole list is overwritten; there is no incremental patch.
    pub async fn set_user_permissions(
        &self,
        user_id: &str,
        permissions: Vec<String>,
    ) -> ClientResult<()> {
        let body = SetUserPermissions { permissions };

        let resp = self
            .put::<ApiResponse<()>, _>(&format!("/permissions/users/{}/permissions", user_id), &body)
            .await?;
        Self::check_envelope(resp)?;
        info!(user_id, count = body.permissions.len(), "Replaced direct permissions");
        Ok(())
    }
}
