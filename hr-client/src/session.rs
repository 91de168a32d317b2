//! Session context
//!
//! An explicit session value threaded through the application instead of
//! ambient reads from browser-style local storage. Route guards and the
//! permission resolver receive the user/session as a parameter, which keeps
//! them unit-testable. This is a client convenience cache, not a security
//! boundary: the server remains the enforcement point.

use shared::client::LoginResponse;
use shared::models::ADMIN_ROLE;

use crate::{ClientConfig, HttpClient};

/// Authenticated session state
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token attached to every request
    pub token: String,
    /// The authenticated user's id
    pub user_id: String,
    /// The authenticated user's role
    pub role: String,
}

impl Session {
    /// Create a session from a successful login
    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            token: login.token.clone(),
            user_id: login.user.id.clone(),
            role: login.user.role.clone(),
        }
    }

    /// Whether the session belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Client configuration carrying this session's token
    pub fn config(&self, base_url: impl Into<String>) -> ClientConfig {
        ClientConfig::new(base_url).with_token(self.token.clone())
    }

    /// Build an authenticated HTTP client for this session
    pub fn client(&self, base_url: impl Into<String>) -> HttpClient {
        self.config(base_url).build_http_client()
    }
}
