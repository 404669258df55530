//! Dashboard screen: summary counts over the accessible documents.

use crate::api::{ApiClient, DocumentFilter};
use crate::display;
use crate::error::{AppError, Result};
use crate::models::{Document, Id};
use crate::session::SessionStore;

/// Summary counters shown as the three dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Documents the backend returned for this user
    pub total: usize,
    /// Of those, documents in the user's own department
    pub department: usize,
    /// Download count summed across all accessible documents
    pub downloads: u64,
}

/// Loaded dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// Display name of the user's department, when known.
    pub department_label: Option<String>,
}

/// Pure aggregation over a fetched document list.
pub fn compute_stats(documents: &[Document], department_id: Option<&Id>) -> DashboardStats {
    let department = match department_id {
        Some(id) => documents
            .iter()
            .filter(|doc| doc.department_id.as_ref() == Some(id))
            .count(),
        None => 0,
    };
    DashboardStats {
        total: documents.len(),
        department,
        downloads: documents.iter().map(|doc| doc.download_count).sum(),
    }
}

/// Department label: the user record's own department name when the
/// backend nested one, else the well-known seeded names.
fn department_label(session: &SessionStore) -> Option<String> {
    let user = session.user()?;
    if let Some(name) = &user.department_name {
        return Some(name.clone());
    }
    user.department_id
        .as_ref()
        .and_then(display::department_display_name)
        .map(str::to_string)
}

pub async fn load(client: &ApiClient, session: &SessionStore) -> Result<DashboardView> {
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    let documents = client
        .list_documents(token, &DocumentFilter::default())
        .await
        .map_err(|e| super::surface(e, "Access denied", "Failed to load dashboard"))?;

    let department_id = session.user().and_then(|user| user.department_id.clone());
    Ok(DashboardView {
        stats: compute_stats(&documents, department_id.as_ref()),
        department_label: department_label(session),
    })
}
