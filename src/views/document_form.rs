//! Upload screen: new-document form validation and submit.

use crate::api::{ApiClient, NewDocument};
use crate::authz;
use crate::error::{AppError, Result};
use crate::models::{Document, Id};
use crate::session::SessionStore;

/// Upload size cap.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Accepted upload extensions.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["pdf", "docx", "xlsx", "jpg", "jpeg", "png"];

/// Validate a draft before any network call. The first failing field
/// wins, mirroring the form's top-to-bottom checks.
pub fn validate(draft: &NewDocument) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if draft.category_id.is_none() {
        return Err(AppError::Validation("Category is required".into()));
    }
    if draft.department_id.is_none() {
        return Err(AppError::Validation("Department is required".into()));
    }
    let Some(file) = &draft.file else {
        return Err(AppError::Validation("File is required".into()));
    };
    if file.data.len() as u64 > MAX_FILE_SIZE {
        return Err(AppError::Validation("File must be 10MB or smaller".into()));
    }
    if !has_allowed_extension(&file.file_name) {
        return Err(AppError::Validation(
            "File type must be PDF, DOCX, XLSX, JPG, or PNG".into(),
        ));
    }
    Ok(())
}

fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// The department the draft must carry: managers are locked to their own
/// department, everyone else keeps their pick.
pub fn effective_department(session: &SessionStore, picked: Option<Id>) -> Option<Id> {
    if authz::is_department_locked(session.user()) {
        session.user().and_then(|user| user.department_id.clone())
    } else {
        picked
    }
}

/// Validate and submit the draft. Requires `documents-create`.
pub async fn submit(
    client: &ApiClient,
    session: &SessionStore,
    mut draft: NewDocument,
) -> Result<Document> {
    if !authz::has_permission(session.user(), authz::DOCUMENTS_CREATE) {
        return Err(AppError::Authorization(
            "You do not have permission to upload documents.".into(),
        ));
    }
    let token = session
        .token()
        .ok_or_else(|| AppError::Authentication("not signed in".into()))?;

    draft.department_id = effective_department(session, draft.department_id.take());
    validate(&draft)?;

    client.create_document(token, draft).await.map_err(|e| match e {
        // Keep the backend's own validation messages verbatim.
        AppError::Api { status, message } if status == 422 => AppError::Validation(message),
        other => super::surface(other, "Access denied", "Failed to create document"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FileUpload;
    use crate::models::AccessLevel;
    use crate::session::{MemoryBackend, PersistedSession, SessionBackend, SessionStore};

    fn draft_with_file(file_name: &str, size: usize) -> NewDocument {
        NewDocument {
            title: "Handbook".into(),
            description: None,
            access_level: AccessLevel::Public,
            category_id: Some(Id::from("1")),
            department_id: Some(Id::from("2")),
            file: Some(FileUpload {
                file_name: file_name.into(),
                content_type: None,
                data: vec![0; size],
            }),
        }
    }

    fn session_for(user_json: &str) -> SessionStore {
        let backend = MemoryBackend::default();
        backend
            .store(&PersistedSession {
                token: Some("tok".into()),
                user: Some(serde_json::from_str(user_json).unwrap()),
            })
            .unwrap();
        SessionStore::new(Box::new(backend))
    }

    #[test]
    fn test_validation_order_first_failure_wins() {
        let mut draft = draft_with_file("a.pdf", 10);
        draft.title = "  ".into();
        draft.category_id = None;
        let err = validate(&draft).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Title is required"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let mut draft = draft_with_file("a.pdf", 10);
        draft.file = None;
        let err = validate(&draft).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "File is required"));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let draft = draft_with_file("a.pdf", (MAX_FILE_SIZE + 1) as usize);
        let err = validate(&draft).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("10MB")));
    }

    #[test]
    fn test_extension_allowlist() {
        assert!(validate(&draft_with_file("report.PDF", 10)).is_ok());
        assert!(validate(&draft_with_file("photo.jpeg", 10)).is_ok());
        let err = validate(&draft_with_file("script.exe", 10)).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("File type")));
        let err = validate(&draft_with_file("noextension", 10)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_manager_department_is_locked_to_own() {
        let session =
            session_for(r#"{"id":7,"name":"Ana","department_id":4,"roles":["manager"]}"#);
        let effective = effective_department(&session, Some(Id::from("2")));
        assert_eq!(effective, Some(Id::from("4")));
    }

    #[test]
    fn test_non_manager_keeps_picked_department() {
        let session =
            session_for(r#"{"id":7,"name":"Ana","department_id":4,"roles":["admin"]}"#);
        let effective = effective_department(&session, Some(Id::from("2")));
        assert_eq!(effective, Some(Id::from("2")));
    }
}
