//! Authentication endpoints: register, login, logout.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Id, User};

use super::ApiClient;

/// Payload for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub department_id: Id,
    pub role: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response of register and login. Some deployments omit the token on
/// register when email verification is pending, so both fields are
/// optional and the caller decides whether a session can be established.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl ApiClient {
    /// Register a new account. Unauthenticated.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.send_json(self.post("/register").json(request)).await
    }

    /// Exchange credentials for a token. Unauthenticated.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.send_json(self.post("/login").json(&LoginRequest { email, password }))
            .await
    }

    /// Invalidate the server-side session. Callers treat this as
    /// best-effort; local state is cleared regardless of the outcome.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.send(self.post("/logout").bearer_auth(token)).await?;
        Ok(())
    }
}
