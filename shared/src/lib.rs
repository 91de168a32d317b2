//! Shared types for the HR console
//!
//! Domain models, the permission catalog, the permission resolver and the
//! home-section availability calculator, plus the API envelope and error
//! codes shared between the console client and the HR administration API.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod resolver;
pub mod response;
pub mod sections;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use catalog::{PERMISSION_CATALOG, PermissionDef};
pub use error::{ApiError, ApiErrorCode};
pub use resolver::{has_category_permission, has_permission};
pub use response::ApiResponse;
pub use sections::{
    HOME_SECTIONS, SectionStats, available_sections, group_sections_by_category,
    section_permission_stats,
};
