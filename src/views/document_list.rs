//! Document list screen: search, filters and the table rows.

use crate::api::{ApiClient, DocumentFilter};
use crate::authz;
use crate::display::EM_DASH;
use crate::error::{AppError, Result};
use crate::models::Id;
use crate::session::SessionStore;

/// One row of the documents table, with reference data already joined.
#[derive(Debug, Clone)]
pub struct DocumentRow {
    pub id: Id,
    pub title: String,
    pub category: String,
    pub department: String,
    pub uploader: String,
}

/// Loaded list state.
#[derive(Debug, Clone)]
pub struct DocumentListView {
    pub rows: Vec<DocumentRow>,
    /// Whether the shell should offer the upload action.
    pub can_create: bool,
}

pub async fn load(
    client: &ApiClient,
    session: &SessionStore,
    filter: &DocumentFilter,
) -> Result<DocumentListView> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    // Reference data failures degrade to empty lists; the rows then show
    // the placeholder instead of a resolved name.
    let categories = client.list_categories(Some(token)).await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load categories");
        Vec::new()
    });
    let departments = client
        .list_departments(Some(token))
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load departments");
            Vec::new()
        });

    let documents = client
        .list_documents(token, filter)
        .await
        .map_err(|e| super::surface(e, "Access denied", "Failed to load documents"))?;

    let rows = documents
        .into_iter()
        .map(|doc| DocumentRow {
            category: super::category_title(&categories, doc.category_id.as_ref())
                .unwrap_or_else(|| EM_DASH.to_string()),
            department: super::department_name(&departments, doc.department_id.as_ref())
                .unwrap_or_else(|| EM_DASH.to_string()),
            uploader: doc
                .uploader
                .as_ref()
                .and_then(|uploader| uploader.name.clone())
                .unwrap_or_else(|| EM_DASH.to_string()),
            id: doc.id,
            title: doc.title,
        })
        .collect();

    Ok(DocumentListView {
        rows,
        can_create: authz::has_permission(session.user(), authz::DOCUMENTS_CREATE),
    })
}
