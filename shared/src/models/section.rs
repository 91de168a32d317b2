//! Home Section Model

use serde::Serialize;

/// Permission-gated navigation entry on the landing page
///
/// Static configuration, not persisted per-user. A section is visible if the
/// user holds any one of `required_permissions` (logical OR, not AND).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    pub category: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub required_permissions: &'static [&'static str],
}
