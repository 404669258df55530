//! Registration screen: field validation, submit, session establishment.

use crate::api::{ApiClient, RegisterRequest};
use crate::error::{AppError, Result};
use crate::models::{Department, Id};
use crate::session::SessionStore;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create account. Please try again.";

/// Raw form state as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub department_id: Option<Id>,
    pub role: String,
}

/// Validate top-to-bottom; the first failing field wins. Runs before any
/// network call.
pub fn validate(form: &RegistrationForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if form.email.is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }
    if !looks_like_email(&form.email) {
        return Err(AppError::Validation("Email is invalid".into()));
    }
    if form.password.chars().count() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    if form.password != form.password_confirmation {
        return Err(AppError::Validation("Passwords do not match".into()));
    }
    if form.department_id.is_none() {
        return Err(AppError::Validation("Department is required".into()));
    }
    if form.role.is_empty() {
        return Err(AppError::Validation("Role is required".into()));
    }
    Ok(())
}

/// Loose shape check: some non-space text, an `@`, and a dotted domain.
fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        let Some((local, domain)) = token.split_once('@') else {
            return false;
        };
        if local.is_empty() {
            return false;
        }
        match domain.split_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    })
}

/// Fetch departments for the picker. Unauthenticated; failures degrade
/// to an empty list.
pub async fn load_departments(client: &ApiClient) -> Vec<Department> {
    client.list_departments(None).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load departments");
        Vec::new()
    })
}

/// Validate, register, and establish the session when the backend hands
/// back a token. On failure nothing is persisted and the store returns
/// to anonymous.
pub async fn submit(
    client: &ApiClient,
    session: &mut SessionStore,
    form: &RegistrationForm,
) -> Result<()> {
    validate(form)?;
    let department_id = form
        .department_id
        .clone()
        .ok_or_else(|| AppError::Validation("Department is required".into()))?;

    session.begin_authentication();
    let request = RegisterRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
        department_id,
        role: form.role.clone(),
    };

    match client.register(&request).await {
        Ok(response) => match (response.token, response.user) {
            (Some(token), Some(user)) => session.complete_authentication(token, user),
            // Registered but no session material returned; stay anonymous.
            _ => {
                session.fail_authentication();
                Ok(())
            }
        },
        Err(e) => {
            session.fail_authentication();
            Err(match e {
                AppError::Api { status, message } if status == 422 => AppError::Validation(message),
                other => super::surface(other, GENERIC_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE),
            })
        }
    }
}
