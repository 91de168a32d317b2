//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse};
use shared::error::{ApiError, ApiErrorCode};
use shared::models::User;

use crate::{ApiResponse, ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the HR administration API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success envelope code to a typed error
    fn envelope_error(code: String, message: String) -> ClientError {
        match ApiErrorCode::from_code(&code) {
            Some(ApiErrorCode::Unauthorized)
            | Some(ApiErrorCode::InvalidToken)
            | Some(ApiErrorCode::TokenExpired) => ClientError::Unauthorized,
            Some(ApiErrorCode::Forbidden) => ClientError::Forbidden(message),
            Some(ApiErrorCode::NotFound) => ClientError::NotFound(message),
            Some(ApiErrorCode::Validation) => ClientError::Validation(message),
            _ => ClientError::Api(ApiError::new(code, message)),
        }
    }

    /// Unwrap the API envelope, requiring a data payload
    pub(crate) fn unwrap_envelope<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
        if !resp.is_success() {
            return Err(Self::envelope_error(resp.code, resp.message));
        }

        resp.data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    /// Check the API envelope of a call that returns no payload
    pub(crate) fn check_envelope<T>(resp: ApiResponse<T>) -> ClientResult<()> {
        if !resp.is_success() {
            return Err(Self::envelope_error(resp.code, resp.message));
        }
        Ok(())
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let resp = self
            .post::<ApiResponse<LoginResponse>, _>("/auth/login", &request)
            .await?;
        Self::unwrap_envelope(resp, "login")
    }

    /// Get the current authenticated user snapshot
    pub async fn me(&self) -> ClientResult<User> {
        let resp = self.get::<ApiResponse<User>>("/auth/me").await?;
        Self::unwrap_envelope(resp, "user")
    }

    /// Logout and drop the local token
    pub async fn logout(&mut self) -> ClientResult<()> {
        let resp = self.post_empty::<ApiResponse<()>>("/auth/logout").await?;
        Self::check_envelope(resp)?;
        self.token = None;
        Ok(())
    }
}
