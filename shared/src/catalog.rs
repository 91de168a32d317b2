//! Permission Catalog
//!
//! Static registry mapping permission keys to display metadata. Pure data:
//! the resolver matches grants by raw key equality and does not require a
//! key to exist here. The catalog only drives labels, badges and
//! category-level lookups.

/// Permission definition metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionDef {
    /// Stable dotted identifier (`category.action`)
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Verb label for UI badges
    pub action: &'static str,
}

/// All permission definitions known to the console, in declaration order
pub static PERMISSION_CATALOG: &[PermissionDef] = &[
    PermissionDef {
        key: "employees.view",
        label: "View employees",
        description: "Browse employee records and profiles",
        category: "employees",
        action: "view",
    },
    PermissionDef {
        key: "employees.manage",
        label: "Manage employees",
        description: "Create, edit and archive employee records",
        category: "employees",
        action: "manage",
    },
    PermissionDef {
        key: "documents.view",
        label: "View documents",
        description: "Browse employee documents and attachments",
        category: "documents",
        action: "view",
    },
    PermissionDef {
        key: "documents.manage",
        label: "Manage documents",
        description: "Upload, replace and delete employee documents",
        category: "documents",
        action: "manage",
    },
    PermissionDef {
        key: "vacations.view",
        label: "View leave requests",
        description: "Browse leave requests and balances",
        category: "vacations",
        action: "view",
    },
    PermissionDef {
        key: "vacations.approve",
        label: "Approve leave requests",
        description: "Approve or reject pending leave requests",
        category: "vacations",
        action: "approve",
    },
    PermissionDef {
        key: "incidents.view",
        label: "View incidents",
        description: "Browse disciplinary incident records",
        category: "incidents",
        action: "view",
    },
    PermissionDef {
        key: "incidents.manage",
        label: "Manage incidents",
        description: "Record and resolve disciplinary incidents",
        category: "incidents",
        action: "manage",
    },
    PermissionDef {
        key: "rewards.view",
        label: "View rewards",
        description: "Browse reward and commendation records",
        category: "rewards",
        action: "view",
    },
    PermissionDef {
        key: "rewards.manage",
        label: "Manage rewards",
        description: "Grant and revoke rewards and commendations",
        category: "rewards",
        action: "manage",
    },
    PermissionDef {
        key: "salary.view",
        label: "View salaries",
        description: "Browse salary grades and payment history",
        category: "salary",
        action: "view",
    },
    PermissionDef {
        key: "reports.view",
        label: "View reports",
        description: "Browse departmental reports",
        category: "reports",
        action: "view",
    },
    PermissionDef {
        key: "reports.export",
        label: "Export reports",
        description: "Export reports to external formats",
        category: "reports",
        action: "export",
    },
    PermissionDef {
        key: "chat.use",
        label: "Use internal chat",
        description: "Send and receive internal chat messages",
        category: "chat",
        action: "use",
    },
    PermissionDef {
        key: "users.view",
        label: "View user accounts",
        description: "Browse console user accounts",
        category: "users",
        action: "view",
    },
    PermissionDef {
        key: "users.manage",
        label: "Manage user accounts",
        description: "Create, edit and deactivate console user accounts",
        category: "users",
        action: "manage",
    },
    PermissionDef {
        key: "permissions.manage",
        label: "Manage permissions",
        description: "Administer permission definitions, groups and grants",
        category: "permissions",
        action: "manage",
    },
    PermissionDef {
        key: "attendance.view",
        label: "View attendance",
        description: "Browse attendance and check-in records",
        category: "attendance",
        action: "view",
    },
    PermissionDef {
        key: "attendance.manage",
        label: "Manage attendance",
        description: "Correct and annotate attendance records",
        category: "attendance",
        action: "manage",
    },
    PermissionDef {
        key: "archive.view",
        label: "View archive",
        description: "Browse archived employee files",
        category: "archive",
        action: "view",
    },
    PermissionDef {
        key: "statistics.view",
        label: "View statistics",
        description: "Browse departmental statistics dashboards",
        category: "statistics",
        action: "view",
    },
    PermissionDef {
        key: "notifications.view",
        label: "View notifications",
        description: "Browse department-wide notifications",
        category: "notifications",
        action: "view",
    },
    PermissionDef {
        key: "notifications.send",
        label: "Send notifications",
        description: "Publish department-wide notifications",
        category: "notifications",
        action: "send",
    },
    PermissionDef {
        key: "committees.view",
        label: "View committees",
        description: "Browse committee assignments",
        category: "committees",
        action: "view",
    },
    PermissionDef {
        key: "committees.manage",
        label: "Manage committees",
        description: "Create committees and assign members",
        category: "committees",
        action: "manage",
    },
    PermissionDef {
        key: "settings.manage",
        label: "Manage settings",
        description: "Change department-wide console settings",
        category: "settings",
        action: "manage",
    },
];

/// Look up a permission definition by key
pub fn find(key: &str) -> Option<&'static PermissionDef> {
    PERMISSION_CATALOG.iter().find(|def| def.key == key)
}

/// Keys of all permissions in `category`, in declaration order
pub fn category_keys(category: &str) -> impl Iterator<Item = &'static str> {
    PERMISSION_CATALOG
        .iter()
        .filter(move |def| def.category == category)
        .map(|def| def.key)
}

/// All catalog categories, deduplicated, in declaration order
pub fn categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for def in PERMISSION_CATALOG {
        if !categories.contains(&def.category) {
            categories.push(def.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<&str> = PERMISSION_CATALOG.iter().map(|def| def.key).collect();
        assert_eq!(keys.len(), PERMISSION_CATALOG.len());
    }

    #[test]
    fn test_find_known_and_unknown_keys() {
        let def = find("employees.view").expect("employees.view missing from catalog");
        assert_eq!(def.category, "employees");
        assert_eq!(def.action, "view");

        assert!(find("no.such.key").is_none());
    }

    #[test]
    fn test_category_keys() {
        let keys: Vec<&str> = category_keys("vacations").collect();
        assert_eq!(keys, vec!["vacations.view", "vacations.approve"]);

        assert_eq!(category_keys("unknown").count(), 0);
    }

    #[test]
    fn test_categories_in_declaration_order() {
        let categories = categories();
        assert_eq!(categories.first(), Some(&"employees"));
        assert!(categories.contains(&"settings"));

        let unique: HashSet<&str> = categories.iter().copied().collect();
        assert_eq!(unique.len(), categories.len());
    }
}
