//! Document detail screen: metadata plus action affordances.

use std::path::{Path, PathBuf};

use crate::api::ApiClient;
use crate::authz;
use crate::display::{self, FileKind};
use crate::error::{AppError, Result};
use crate::models::{Document, Id};
use crate::session::SessionStore;

pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to view this document.";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load document details.";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete document. You may not have permission.";
pub const DOWNLOAD_FAILURE_MESSAGE: &str = "Download failed. Please try again.";

/// Loaded detail state: the document, resolved reference names, and the
/// actions this user may take on it.
#[derive(Debug, Clone)]
pub struct DocumentDetailView {
    pub document: Document,
    pub category: Option<String>,
    pub department: Option<String>,
    pub can_download: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl DocumentDetailView {
    pub fn access_label(&self) -> &'static str {
        self.document
            .access_level
            .map(|level| level.label())
            .unwrap_or(display::EM_DASH)
    }

    pub fn file_kind(&self) -> FileKind {
        self.document
            .file_type
            .as_deref()
            .map(FileKind::from_mime_or_ext)
            .unwrap_or(FileKind::Other)
    }

    pub fn size_label(&self) -> Option<String> {
        self.document.file_size.map(display::format_bytes)
    }
}

/// Load the document together with its reference data.
///
/// The three reads are issued concurrently; any one failing fails the
/// whole view rather than rendering partially.
pub async fn load(client: &ApiClient, session: &SessionStore, id: &Id) -> Result<DocumentDetailView> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    let (document, categories, departments) = tokio::try_join!(
        client.get_document(token, id),
        client.list_categories(Some(token)),
        client.list_departments(Some(token)),
    )
    .map_err(|e| super::surface(e, FORBIDDEN_MESSAGE, LOAD_FAILURE_MESSAGE))?;

    let user = session.user();
    Ok(DocumentDetailView {
        category: super::category_title(&categories, document.category_id.as_ref()),
        department: super::department_name(&departments, document.department_id.as_ref()),
        can_download: authz::has_permission(user, authz::DOCUMENTS_DOWNLOAD),
        can_edit: authz::can_edit_document(user, &document),
        can_delete: authz::can_delete_document(user, &document),
        document,
    })
}

/// Download the document's file into `target_dir`, returning the written
/// path. The filename falls back to `document-<id>` when the record
/// carries none.
pub async fn download_to(
    client: &ApiClient,
    session: &SessionStore,
    document: &Document,
    target_dir: &Path,
) -> Result<PathBuf> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    let bytes = client
        .download_document(token, &document.id)
        .await
        .map_err(|e| super::surface(e, DOWNLOAD_FAILURE_MESSAGE, DOWNLOAD_FAILURE_MESSAGE))?;

    let file_name = document
        .file_name
        .clone()
        .unwrap_or_else(|| format!("document-{}", document.id));
    let target = target_dir.join(file_name);
    tokio::fs::write(&target, bytes).await?;
    Ok(target)
}

/// Delete the document. All failures surface as one message.
pub async fn delete(client: &ApiClient, session: &SessionStore, id: &Id) -> Result<()> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    client
        .delete_document(token, id)
        .await
        .map_err(|e| super::surface(e, DELETE_FAILURE_MESSAGE, DELETE_FAILURE_MESSAGE))
}
