//! Login and logout flows.

use crate::api::ApiClient;
use crate::error::{AppError, Result};
use crate::session::SessionStore;

pub const LOGIN_FAILURE_MESSAGE: &str = "Failed to sign in. Please check your credentials.";

/// Exchange credentials for a session. On failure the store returns to
/// anonymous and nothing is persisted.
pub async fn submit(
    client: &ApiClient,
    session: &mut SessionStore,
    email: &str,
    password: &str,
) -> Result<()> {
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    session.begin_authentication();
    match client.login(email, password).await {
        Ok(response) => match (response.token, response.user) {
            (Some(token), Some(user)) => session.complete_authentication(token, user),
            _ => {
                session.fail_authentication();
                Err(AppError::Authentication(LOGIN_FAILURE_MESSAGE.into()))
            }
        },
        Err(e) => {
            session.fail_authentication();
            Err(match e {
                AppError::Authentication(message) => AppError::Authentication(message),
                other => super::surface(other, LOGIN_FAILURE_MESSAGE, LOGIN_FAILURE_MESSAGE),
            })
        }
    }
}

/// Log out: tell the backend, then clear local state. The server call is
/// best-effort; the local session is cleared even when it fails.
pub async fn logout(client: &ApiClient, session: &mut SessionStore) {
    if let Some(token) = session.token() {
        if let Err(e) = client.logout(token).await {
            tracing::warn!(error = %e, "server-side logout failed");
        }
    }
    session.clear();
}
