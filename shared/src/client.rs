//! Client-related types shared between the API and the console client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::{GroupRef, PermissionRef, User};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// Aggregated permission view DTOs
// =============================================================================

/// Server-computed aggregated permission view
/// (from `GET /permissions/user/:userId/permissions`)
///
/// The client never computes this union itself after a mutation; it always
/// re-asks the server for the resulting view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionsView {
    /// Flat union of role/direct/group grants
    #[serde(default)]
    pub permission_ids: Vec<String>,
    /// The grant sources behind the union
    pub user: GrantSources,
}

/// Grant sources embedded in the aggregated view
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GrantSources {
    #[serde(default)]
    pub direct_permissions: Vec<PermissionRef>,
    #[serde(default)]
    pub permission_groups: Vec<GroupRef>,
}

/// Wholesale replacement of a user's direct permission set
/// (body of `PUT /permissions/users/:userId/permissions`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetUserPermissions {
    /// The complete new direct-grant key list (not an incremental patch)
    pub permissions: Vec<String>,
}
