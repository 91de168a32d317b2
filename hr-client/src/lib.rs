//! HR Client - HTTP client for the HR administration API
//!
//! Typed network calls for the permission administration surface: permission
//! and group CRUD, membership changes, direct-grant replacement and the
//! aggregated permission view, plus auth and an explicit session context.

pub mod admin;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use loader::{Generation, PermissionLoader};
pub use session::Session;

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, UserPermissionsView};
pub use shared::models::User;
