//! Edit screen: load, permission pre-gate, validation and submit.

use crate::api::{ApiClient, UpdateDocument};
use crate::authz;
use crate::display::EM_DASH;
use crate::error::{AppError, Result};
use crate::models::{AccessLevel, Category, Department, Document, Id};
use crate::session::SessionStore;

pub const NOT_ALLOWED_MESSAGE: &str = "You do not have permission to edit this document.";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load document";

/// Editable fields, pre-filled from the loaded document.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub title: String,
    pub description: String,
    pub category_id: Option<Id>,
    /// Shown read-only; sent back unchanged.
    pub department_id: Option<Id>,
    pub access_level: AccessLevel,
}

impl EditForm {
    fn from_document(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            description: document.description.clone().unwrap_or_default(),
            category_id: document.category_id.clone(),
            department_id: document.department_id.clone(),
            access_level: document.access_level.unwrap_or(AccessLevel::Public),
        }
    }
}

/// Loaded edit state.
#[derive(Debug, Clone)]
pub struct DocumentEditView {
    pub form: EditForm,
    pub categories: Vec<Category>,
    pub departments: Vec<Department>,
}

impl DocumentEditView {
    /// Read-only department label under the locked field.
    pub fn department_label(&self) -> String {
        super::department_name(&self.departments, self.form.department_id.as_ref())
            .unwrap_or_else(|| EM_DASH.to_string())
    }
}

/// Load the document and reference data, then gate: editing requires the
/// blanket update permission or an explicit ownership match on the flat
/// `uploaded_by`/`uploader_id` fields.
pub async fn load(client: &ApiClient, session: &SessionStore, id: &Id) -> Result<DocumentEditView> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    let (document, categories, departments) = tokio::try_join!(
        client.get_document(token, id),
        client.list_categories(Some(token)),
        client.list_departments(Some(token)),
    )
    .map_err(|e| super::surface(e, NOT_ALLOWED_MESSAGE, LOAD_FAILURE_MESSAGE))?;

    let user = session.user();
    let can_update_any = authz::has_permission(user, authz::DOCUMENTS_UPDATE);
    let is_owner = user
        .map(|u| {
            document.uploaded_by.as_ref() == Some(&u.id)
                || document.uploader_id.as_ref() == Some(&u.id)
        })
        .unwrap_or(false);
    if !can_update_any && !is_owner {
        return Err(AppError::Authorization(NOT_ALLOWED_MESSAGE.into()));
    }

    Ok(DocumentEditView {
        form: EditForm::from_document(&document),
        categories,
        departments,
    })
}

/// Validate the form before submit: title and category are required.
pub fn validate(form: &EditForm) -> Result<()> {
    if form.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if form.category_id.is_none() {
        return Err(AppError::Validation("Category is required".into()));
    }
    Ok(())
}

/// Validate and save. The department travels back unchanged; the backend
/// rejects attempts to move a document between departments.
pub async fn submit(
    client: &ApiClient,
    session: &SessionStore,
    id: &Id,
    form: &EditForm,
) -> Result<Document> {
    validate(form)?;
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    let update = UpdateDocument {
        title: form.title.clone(),
        description: if form.description.is_empty() {
            None
        } else {
            Some(form.description.clone())
        },
        category_id: form.category_id.clone(),
        department_id: form.department_id.clone(),
        access_level: Some(form.access_level),
    };

    client
        .update_document(token, id, &update)
        .await
        .map_err(|e| match e {
            AppError::Api { status, message } if status == 422 => AppError::Validation(message),
            other => super::surface(other, NOT_ALLOWED_MESSAGE, "Failed to update document"),
        })
}
