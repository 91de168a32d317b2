//! Permission Model

use serde::{Deserialize, Serialize};

/// Permission definition entity
///
/// A definition, not a grant. `key` is globally unique and immutable once
/// referenced by any grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    /// Stable dotted identifier (e.g. `"employees.view"`)
    pub key: String,
    /// Display string
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Grouping label (e.g. `"employees"`)
    pub category: String,
    /// Verb label for UI badges (e.g. `"view"`)
    pub action: String,
}

/// Create permission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCreate {
    pub key: String,
    pub label: String,
    pub description: Option<String>,
    pub category: String,
    pub action: String,
}

/// Update permission payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PermissionUpdate {
    pub label: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub action: Option<String>,
}

/// Permission reference as it appears in grant lists
///
/// The API is inconsistent about the shape of grant entries: some endpoints
/// return a bare key string, others an object carrying a `key` field. Both
/// shapes deserialize here and are normalized through [`PermissionRef::key`],
/// so no call site re-checks the shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PermissionRef {
    /// Bare key string, e.g. `"employees.view"`
    Key(String),
    /// Object form, e.g. `{"key": "employees.view"}`
    Entry { key: String },
}

impl PermissionRef {
    /// Canonical permission key for this entry
    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) => key,
            Self::Entry { key } => key,
        }
    }
}

impl From<&str> for PermissionRef {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PermissionRef {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_ref_accepts_both_shapes() {
        let refs: Vec<PermissionRef> =
            serde_json::from_str(r#"["employees.view", {"key": "vacations.approve"}]"#)
                .expect("Failed to parse mixed grant list");

        assert_eq!(refs[0].key(), "employees.view");
        assert_eq!(refs[1].key(), "vacations.approve");
    }

    #[test]
    fn test_permission_ref_ignores_extra_fields() {
        let entry: PermissionRef = serde_json::from_str(
            r#"{"key": "salary.view", "label": "View salaries", "category": "salary"}"#,
        )
        .expect("Failed to parse populated grant entry");

        assert_eq!(entry.key(), "salary.view");
    }
}
