//! Permission resolution
//!
//! Pure evaluation of a user snapshot against a requested permission key.
//! Grants are additive-only: the flat map, group bundles and direct grants
//! are OR-ed together, and no source can deny what another source grants.
//! The caller is responsible for having fetched a populated snapshot; no
//! network access happens here.

use crate::catalog;
use crate::models::User;

/// Check whether `user` holds `key`
///
/// Fail-closed: a missing user resolves to `false`. The `admin` role is a
/// hard override and short-circuits every other check. Keys are matched by
/// raw string equality, so a key absent from the catalog can still be
/// granted.
///
/// # Rules
///
/// 1. No user (unauthenticated / not yet loaded) -> `false`
/// 2. `role == "admin"` -> `true`
/// 3. Otherwise, `true` on the first match of:
///    - flat map entry `permissions[key] == true`
///    - `key` in any membership group's permission bundle
///    - `key` in the direct permission list
pub fn has_permission(key: &str, user: Option<&User>) -> bool {
    let Some(user) = user else {
        return false;
    };

    if user.is_admin() {
        return true;
    }

    if user.permissions.get(key).copied().unwrap_or(false) {
        return true;
    }

    if user
        .permission_groups
        .iter()
        .any(|group| group.permissions.iter().any(|entry| entry.key() == key))
    {
        return true;
    }

    user.direct_permissions
        .iter()
        .any(|entry| entry.key() == key)
}

/// Check whether `user` holds any permission in `category`
///
/// Consults the catalog to map the category to its member keys, then
/// OR-reduces [`has_permission`] over that set. Admin override applies.
pub fn has_category_permission(category: &str, user: Option<&User>) -> bool {
    let Some(user) = user else {
        return false;
    };

    if user.is_admin() {
        return true;
    }

    catalog::category_keys(category).any(|key| has_permission(key, Some(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupRef, PermissionRef};
    use std::collections::HashMap;

    fn employee(role: &str) -> User {
        User {
            id: "u-1".to_string(),
            username: "tester".to_string(),
            role: role.to_string(),
            permissions: HashMap::new(),
            direct_permissions: vec![],
            permission_groups: vec![],
        }
    }

    #[test]
    fn test_missing_user_fails_closed() {
        assert!(!has_permission("employees.view", None));
        assert!(!has_category_permission("employees", None));
    }

    #[test]
    fn test_admin_has_every_permission() {
        let admin = employee("admin");

        assert!(has_permission("employees.view", Some(&admin)));
        assert!(has_permission("salary.view", Some(&admin)));
        // Admin override does not consult the catalog
        assert!(has_permission("no.such.key", Some(&admin)));
        assert!(has_category_permission("salary", Some(&admin)));
    }

    #[test]
    fn test_no_grants_denies_everything() {
        let user = employee("employee");

        assert!(!has_permission("employees.view", Some(&user)));
        assert!(!has_category_permission("employees", Some(&user)));
    }

    #[test]
    fn test_flat_map_grant() {
        let mut user = employee("employee");
        user.permissions.insert("employees.view".to_string(), true);
        user.permissions.insert("salary.view".to_string(), false);

        assert!(has_permission("employees.view", Some(&user)));
        // An explicit false entry is not a grant
        assert!(!has_permission("salary.view", Some(&user)));
    }

    #[test]
    fn test_group_grant() {
        let mut user = employee("employee");
        user.permission_groups.push(GroupRef {
            id: "g-1".to_string(),
            name: "Leave approvers".to_string(),
            permissions: vec![PermissionRef::Entry {
                key: "vacations.approve".to_string(),
            }],
        });

        assert!(has_permission("vacations.approve", Some(&user)));
        assert!(!has_permission("vacations.view", Some(&user)));
    }

    #[test]
    fn test_direct_grant_mixed_shapes() {
        let mut user = employee("employee");
        user.direct_permissions = vec![
            PermissionRef::Key("a.b".to_string()),
            PermissionRef::Entry {
                key: "c.d".to_string(),
            },
        ];

        assert!(has_permission("a.b", Some(&user)));
        assert!(has_permission("c.d", Some(&user)));
        assert!(!has_permission("e.f", Some(&user)));
    }

    #[test]
    fn test_union_of_single_source_flips_on_removal() {
        let mut user = employee("employee");
        user.direct_permissions = vec![PermissionRef::from("documents.view")];
        assert!(has_permission("documents.view", Some(&user)));

        user.direct_permissions.clear();
        assert!(!has_permission("documents.view", Some(&user)));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut user = employee("employee");
        user.permissions.insert("reports.view".to_string(), true);

        let first = has_permission("reports.view", Some(&user));
        let second = has_permission("reports.view", Some(&user));
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_category_permission_via_member_key() {
        let mut user = employee("employee");
        user.direct_permissions = vec![PermissionRef::from("vacations.approve")];

        assert!(has_category_permission("vacations", Some(&user)));
        assert!(!has_category_permission("salary", Some(&user)));
        // Unknown categories have no member keys
        assert!(!has_category_permission("unknown", Some(&user)));
    }
}
