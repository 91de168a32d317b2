//! Home section availability
//!
//! The landing page is a static list of permission-gated sections. A section
//! is visible if the user holds any one of its required permissions; the
//! admin role sees everything.

use serde::Serialize;

use crate::catalog;
use crate::models::{HomeSection, User};
use crate::resolver::has_permission;

/// Static landing-page section list, in display order
pub static HOME_SECTIONS: &[HomeSection] = &[
    HomeSection {
        category: "employees",
        label: "Employees",
        icon: "users",
        color: "#1d4ed8",
        path: "/employees",
        description: "Employee records and profiles",
        required_permissions: &["employees.view", "employees.manage"],
    },
    HomeSection {
        category: "documents",
        label: "Documents",
        icon: "folder",
        color: "#0e7490",
        path: "/documents",
        description: "Employee documents and attachments",
        required_permissions: &["documents.view", "documents.manage"],
    },
    HomeSection {
        category: "vacations",
        label: "Leave",
        icon: "calendar",
        color: "#15803d",
        path: "/vacations",
        description: "Leave requests and balances",
        required_permissions: &["vacations.view", "vacations.approve"],
    },
    HomeSection {
        category: "incidents",
        label: "Incidents",
        icon: "alert-triangle",
        color: "#b91c1c",
        path: "/incidents",
        description: "Disciplinary incident records",
        required_permissions: &["incidents.view", "incidents.manage"],
    },
    HomeSection {
        category: "rewards",
        label: "Rewards",
        icon: "award",
        color: "#a16207",
        path: "/rewards",
        description: "Rewards and commendations",
        required_permissions: &["rewards.view", "rewards.manage"],
    },
    HomeSection {
        category: "salary",
        label: "Salaries",
        icon: "banknote",
        color: "#166534",
        path: "/salaries",
        description: "Salary grades and payment history",
        required_permissions: &["salary.view"],
    },
    HomeSection {
        category: "reports",
        label: "Reports",
        icon: "bar-chart",
        color: "#7c3aed",
        path: "/reports",
        description: "Departmental reports and exports",
        required_permissions: &["reports.view", "reports.export"],
    },
    HomeSection {
        category: "chat",
        label: "Chat",
        icon: "message-circle",
        color: "#0369a1",
        path: "/chat",
        description: "Internal department chat",
        required_permissions: &["chat.use"],
    },
    HomeSection {
        category: "users",
        label: "User Accounts",
        icon: "user-cog",
        color: "#334155",
        path: "/users",
        description: "Console user accounts",
        required_permissions: &["users.view", "users.manage"],
    },
    HomeSection {
        category: "permissions",
        label: "Permissions",
        icon: "shield",
        color: "#9f1239",
        path: "/permissions",
        description: "Permission definitions, groups and grants",
        required_permissions: &["permissions.manage"],
    },
    HomeSection {
        category: "attendance",
        label: "Attendance",
        icon: "clock",
        color: "#b45309",
        path: "/attendance",
        description: "Attendance and check-in records",
        required_permissions: &["attendance.view", "attendance.manage"],
    },
    HomeSection {
        category: "archive",
        label: "Archive",
        icon: "archive",
        color: "#57534e",
        path: "/archive",
        description: "Archived employee files",
        required_permissions: &["archive.view"],
    },
    HomeSection {
        category: "statistics",
        label: "Statistics",
        icon: "pie-chart",
        color: "#be185d",
        path: "/statistics",
        description: "Departmental statistics dashboards",
        required_permissions: &["statistics.view"],
    },
    HomeSection {
        category: "notifications",
        label: "Notifications",
        icon: "bell",
        color: "#c2410c",
        path: "/notifications",
        description: "Department-wide notifications",
        required_permissions: &["notifications.view", "notifications.send"],
    },
    HomeSection {
        category: "committees",
        label: "Committees",
        icon: "users-round",
        color: "#4d7c0f",
        path: "/committees",
        description: "Committee assignments",
        required_permissions: &["committees.view", "committees.manage"],
    },
    HomeSection {
        category: "settings",
        label: "Settings",
        icon: "settings",
        color: "#475569",
        path: "/settings",
        description: "Department-wide console settings",
        required_permissions: &["settings.manage"],
    },
];

/// Sections the user may see, in declaration order
///
/// Empty for a missing user; the full list for admins; otherwise the subset
/// where at least one required permission is held.
pub fn available_sections(user: Option<&User>) -> Vec<&'static HomeSection> {
    let Some(user) = user else {
        return Vec::new();
    };

    if user.is_admin() {
        return HOME_SECTIONS.iter().collect();
    }

    HOME_SECTIONS
        .iter()
        .filter(|section| {
            section
                .required_permissions
                .iter()
                .any(|key| has_permission(key, Some(user)))
        })
        .collect()
}

/// Section coverage summary for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    pub total: usize,
    pub available: usize,
    /// `round(available / total * 100)`
    pub percentage: u32,
}

/// Compute section coverage for a user, `None` when no user is loaded
pub fn section_permission_stats(user: Option<&User>) -> Option<SectionStats> {
    let user = user?;

    let total = HOME_SECTIONS.len();
    let available = available_sections(Some(user)).len();
    let percentage = if total == 0 {
        0
    } else {
        ((available as f64 / total as f64) * 100.0).round() as u32
    };

    Some(SectionStats {
        total,
        available,
        percentage,
    })
}

/// Group sections by the display category of their first required permission
///
/// Falls back to the section's own label when the permission is unknown to
/// the catalog. First-seen order; every input section lands in exactly one
/// group.
pub fn group_sections_by_category(
    sections: &[&'static HomeSection],
) -> Vec<(String, Vec<&'static HomeSection>)> {
    let mut groups: Vec<(String, Vec<&'static HomeSection>)> = Vec::new();

    for section in sections {
        let label = section
            .required_permissions
            .first()
            .and_then(|key| catalog::find(key))
            .map(|def| def.category.to_string())
            .unwrap_or_else(|| section.label.to_string());

        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(section),
            None => groups.push((label, vec![section])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PermissionRef;
    use std::collections::HashMap;

    fn user_with_direct(keys: &[&str]) -> User {
        User {
            id: "u-1".to_string(),
            username: "tester".to_string(),
            role: "employee".to_string(),
            permissions: HashMap::new(),
            direct_permissions: keys.iter().map(|k| PermissionRef::from(*k)).collect(),
            permission_groups: vec![],
        }
    }

    #[test]
    fn test_section_list_has_sixteen_entries() {
        assert_eq!(HOME_SECTIONS.len(), 16);
    }

    #[test]
    fn test_every_required_permission_is_in_catalog() {
        for section in HOME_SECTIONS {
            for key in section.required_permissions {
                assert!(
                    crate::catalog::find(key).is_some(),
                    "section {} requires unknown key {}",
                    section.category,
                    key
                );
            }
        }
    }

    #[test]
    fn test_missing_user_sees_nothing() {
        assert!(available_sections(None).is_empty());
        assert!(section_permission_stats(None).is_none());
    }

    #[test]
    fn test_admin_sees_full_list_in_order() {
        let admin = User {
            role: "admin".to_string(),
            ..user_with_direct(&[])
        };

        let sections = available_sections(Some(&admin));
        assert_eq!(sections.len(), HOME_SECTIONS.len());
        assert_eq!(sections[0].category, "employees");
        assert_eq!(sections[15].category, "settings");

        let stats = section_permission_stats(Some(&admin)).expect("Missing admin stats");
        assert_eq!(stats.percentage, 100);
    }

    #[test]
    fn test_no_grants_sees_nothing() {
        let user = user_with_direct(&[]);
        assert!(available_sections(Some(&user)).is_empty());
    }

    #[test]
    fn test_any_one_required_permission_suffices() {
        // employees.view via flat map only
        let mut user = user_with_direct(&[]);
        user.permissions.insert("employees.view".to_string(), true);

        let sections = available_sections(Some(&user));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category, "employees");

        // Unrelated keys stay hidden
        assert!(!sections.iter().any(|s| s.category == "salary"));
    }

    #[test]
    fn test_stats_three_of_sixteen_rounds_to_nineteen() {
        let user = user_with_direct(&["employees.view", "documents.view", "chat.use"]);

        let stats = section_permission_stats(Some(&user)).expect("Missing stats");
        assert_eq!(stats.total, 16);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.percentage, 19);
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let user = user_with_direct(&["vacations.view", "employees.view", "salary.view"]);
        let sections = available_sections(Some(&user));

        let groups = group_sections_by_category(&sections);
        let labels: Vec<&str> = groups.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["employees", "vacations", "salary"]);

        let grouped: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(grouped, sections.len());
    }

    #[test]
    fn test_grouping_falls_back_to_section_label() {
        static ORPHAN: HomeSection = HomeSection {
            category: "orphan",
            label: "Orphan",
            icon: "box",
            color: "#000000",
            path: "/orphan",
            description: "Not in the catalog",
            required_permissions: &["orphan.view"],
        };

        let groups = group_sections_by_category(&[&ORPHAN]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Orphan");
    }
}
