//! Authorization evaluator.
//!
//! Client-side mirror of the server's permission rules, used to decide
//! which actions a screen offers. The server remains authoritative; these
//! checks gate affordances only.
//!
//! Every function here is total: absent or malformed user data resolves
//! to "no access", never to an error.

use crate::models::{Document, Id, User};

pub const DOCUMENTS_VIEW: &str = "documents-view";
pub const DOCUMENTS_CREATE: &str = "documents-create";
pub const DOCUMENTS_UPDATE: &str = "documents-update";
pub const DOCUMENTS_DELETE: &str = "documents-delete";
pub const DOCUMENTS_DOWNLOAD: &str = "documents-download";
pub const CATEGORIES_VIEW: &str = "categories-view";
pub const DEPARTMENTS_VIEW: &str = "departments-view";

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_EMPLOYEE: &str = "employee";

/// Fallback role→permission table, consulted only when the user record
/// carries no explicit permissions list.
fn role_permissions(role: &str) -> &'static [&'static str] {
    match role {
        ROLE_ADMIN => &[
            DOCUMENTS_VIEW,
            DOCUMENTS_CREATE,
            DOCUMENTS_UPDATE,
            DOCUMENTS_DELETE,
            DOCUMENTS_DOWNLOAD,
            CATEGORIES_VIEW,
            DEPARTMENTS_VIEW,
        ],
        ROLE_MANAGER => &[
            DOCUMENTS_VIEW,
            DOCUMENTS_CREATE,
            DOCUMENTS_UPDATE,
            DOCUMENTS_DOWNLOAD,
            CATEGORIES_VIEW,
            DEPARTMENTS_VIEW,
        ],
        ROLE_EMPLOYEE => &[
            DOCUMENTS_VIEW,
            DOCUMENTS_DOWNLOAD,
            CATEGORIES_VIEW,
            DEPARTMENTS_VIEW,
        ],
        _ => &[],
    }
}

/// Whether the user may perform the action named by `permission`.
///
/// An explicit `permissions` list on the user is the sole source of truth
/// when present; otherwise any held role whose table entry contains the
/// token grants it. The two sources are never merged.
pub fn has_permission(user: Option<&User>, permission: &str) -> bool {
    let Some(user) = user else {
        return false;
    };
    if let Some(explicit) = &user.permissions {
        return explicit.iter().any(|granted| granted == permission);
    }
    user.roles
        .names()
        .any(|role| role_permissions(role).contains(&permission))
}

/// Whether the user holds the exact role name (case-sensitive).
pub fn has_role(user: Option<&User>, role: &str) -> bool {
    user.map(|u| u.roles.contains(role)).unwrap_or(false)
}

/// The uploader id recorded on the document, if any.
///
/// The nested `uploader` object is the canonical shape; the flat
/// `uploaded_by` and `uploader_id` fields appear on some endpoints.
pub fn document_owner_id(document: &Document) -> Option<&Id> {
    document
        .uploader
        .as_ref()
        .map(|uploader| &uploader.id)
        .or(document.uploaded_by.as_ref())
        .or(document.uploader_id.as_ref())
}

fn is_uploader(user: &User, document: &Document) -> bool {
    document
        .uploader
        .as_ref()
        .map(|uploader| uploader.id == user.id)
        .unwrap_or(false)
}

fn is_recorded_owner(user: &User, document: &Document) -> bool {
    document
        .uploaded_by
        .as_ref()
        .map(|owner| *owner == user.id)
        .unwrap_or(false)
        || document
            .uploader_id
            .as_ref()
            .map(|owner| *owner == user.id)
            .unwrap_or(false)
}

/// Whether the user may edit the document.
///
/// Admins need `documents-update`. Managers need `documents-update` and
/// must be the uploader. Anyone matching the flat ownership fields may
/// edit their own document without the blanket permission.
pub fn can_edit_document(user: Option<&User>, document: &Document) -> bool {
    let Some(user) = user else {
        return false;
    };
    if has_permission(Some(user), DOCUMENTS_UPDATE) && has_role(Some(user), ROLE_ADMIN) {
        return true;
    }
    if has_permission(Some(user), DOCUMENTS_UPDATE)
        && has_role(Some(user), ROLE_MANAGER)
        && is_uploader(user, document)
    {
        return true;
    }
    is_recorded_owner(user, document)
}

/// Whether the user may delete the document.
///
/// Bare ownership suffices here, unlike edit which also requires the
/// update permission for non-owners. The asymmetry matches the server's
/// observed rules and is kept as-is.
pub fn can_delete_document(user: Option<&User>, document: &Document) -> bool {
    let Some(user) = user else {
        return false;
    };
    if has_permission(Some(user), DOCUMENTS_DELETE) {
        return true;
    }
    is_uploader(user, document)
}

/// Whether the upload form must lock `department_id` to the user's own
/// department. Applies to managers only.
pub fn is_department_locked(user: Option<&User>) -> bool {
    has_role(user, ROLE_MANAGER)
}
