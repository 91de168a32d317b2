//! Data models
//!
//! Shared between the HR administration API and the console client.
//! Wire shapes are camelCase JSON; all IDs are opaque strings assigned
//! by the server.

pub mod group;
pub mod permission;
pub mod section;
pub mod user;

// Re-exports
pub use group::*;
pub use permission::*;
pub use section::*;
pub use user::*;
