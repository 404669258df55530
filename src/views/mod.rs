//! Headless page logic.
//!
//! Each submodule carries the behavior of one screen of the web UI:
//! what it loads, what it validates, which affordances it offers, and how
//! failures surface. Rendering is left to the shell (the bundled CLI, or
//! anything else).

pub mod dashboard;
pub mod document_detail;
pub mod document_edit;
pub mod document_form;
pub mod document_list;
pub mod login;
pub mod register;

use crate::error::AppError;
use crate::models::{Category, Department, Id};

/// Resolve a category title by string-compared id.
pub(crate) fn category_title(categories: &[Category], id: Option<&Id>) -> Option<String> {
    let id = id?;
    categories
        .iter()
        .find(|category| &category.id == id)
        .map(|category| category.title.clone())
}

/// Resolve a department name by string-compared id.
pub(crate) fn department_name(departments: &[Department], id: Option<&Id>) -> Option<String> {
    let id = id?;
    departments
        .iter()
        .find(|department| &department.id == id)
        .map(|department| department.name.clone())
}

/// Map a load/save failure to what the screen shows: 403 keeps its
/// distinct permission message, validation errors pass through verbatim,
/// anything else collapses to the screen's generic message.
pub(crate) fn surface(error: AppError, forbidden: &str, generic: &str) -> AppError {
    match error {
        AppError::Authorization(_) => AppError::Authorization(forbidden.to_string()),
        validation @ AppError::Validation(_) => validation,
        other => {
            tracing::error!(error = %other, "request failed");
            AppError::Internal(generic.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_compares_ids_as_strings() {
        let categories: Vec<Category> =
            serde_json::from_str(r#"[{"id":3,"title":"Invoices"}]"#).unwrap();
        // The document side carries the id as a string.
        let id = Id::from("3");
        assert_eq!(
            category_title(&categories, Some(&id)).as_deref(),
            Some("Invoices")
        );
        assert_eq!(category_title(&categories, None), None);
    }

    #[test]
    fn test_surface_keeps_forbidden_distinct() {
        let err = surface(
            AppError::Authorization("raw".into()),
            "You do not have permission to view this document.",
            "Failed to load document details.",
        );
        assert!(
            matches!(err, AppError::Authorization(msg) if msg.contains("permission to view"))
        );

        let err = surface(
            AppError::NotFound("gone".into()),
            "forbidden",
            "Failed to load document details.",
        );
        assert!(matches!(err, AppError::Internal(msg) if msg == "Failed to load document details."));
    }
}
