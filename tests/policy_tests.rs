//! Authorization policy tests.
//!
//! Pure evaluator tests exercising the public API with no session or
//! network involved.

#[cfg(test)]
mod evaluator_tests {
    use docuvault_client::authz::{
        self, can_delete_document, can_edit_document, has_permission, has_role,
    };
    use docuvault_client::models::{Document, User};

    fn user(json: serde_json::Value) -> User {
        serde_json::from_value(json).unwrap()
    }

    fn document(json: serde_json::Value) -> Document {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_explicit_permissions_ignore_role_table() {
        // Admin by role, but the explicit list grants only view.
        let u = user(serde_json::json!({
            "id": 1,
            "name": "Root",
            "roles": ["admin"],
            "permissions": ["documents-view"],
        }));
        assert!(has_permission(Some(&u), authz::DOCUMENTS_VIEW));
        assert!(!has_permission(Some(&u), authz::DOCUMENTS_DELETE));
        assert!(!has_permission(Some(&u), authz::DOCUMENTS_CREATE));

        // Employee by role, but the explicit list grants delete.
        let u = user(serde_json::json!({
            "id": 2,
            "name": "Worker",
            "roles": ["employee"],
            "permissions": ["documents-delete"],
        }));
        assert!(has_permission(Some(&u), authz::DOCUMENTS_DELETE));
        assert!(!has_permission(Some(&u), authz::DOCUMENTS_VIEW));
    }

    #[test]
    fn test_role_shapes_yield_identical_results() {
        let shapes = [
            serde_json::json!({"id": 5, "name": "M", "roles": "manager"}),
            serde_json::json!({"id": 5, "name": "M", "roles": ["manager"]}),
            serde_json::json!({"id": 5, "name": "M", "roles": [{"name": "manager"}]}),
        ];
        let results: Vec<(bool, bool, bool)> = shapes
            .into_iter()
            .map(|shape| {
                let u = user(shape);
                (
                    has_role(Some(&u), "manager"),
                    has_permission(Some(&u), authz::DOCUMENTS_UPDATE),
                    has_permission(Some(&u), authz::DOCUMENTS_DELETE),
                )
            })
            .collect();
        assert_eq!(results, vec![(true, true, false); 3]);
    }

    #[test]
    fn test_update_permission_alone_never_grants_edit() {
        let u = user(serde_json::json!({
            "id": 3,
            "name": "Worker",
            "roles": ["employee"],
            "permissions": ["documents-update"],
        }));
        let doc = document(serde_json::json!({
            "id": 10,
            "title": "Policy",
            "uploader": {"id": 7, "name": "Other"},
            "uploaded_by": 7,
        }));
        assert!(has_permission(Some(&u), authz::DOCUMENTS_UPDATE));
        assert!(!can_edit_document(Some(&u), &doc));
    }

    #[test]
    fn test_uploader_deletes_with_zero_permissions() {
        let u = user(serde_json::json!({
            "id": "7",
            "name": "Owner",
            "roles": [],
            "permissions": [],
        }));
        let doc = document(serde_json::json!({
            "id": 10,
            "title": "Mine",
            "uploader": {"id": 7, "name": "Owner"},
        }));
        assert!(can_delete_document(Some(&u), &doc));
        // But not edit: delete accepts bare ownership, edit does not.
        assert!(!can_edit_document(Some(&u), &doc));
    }

    #[test]
    fn test_manager_owner_passes_both_edit_branches() {
        let u = user(serde_json::json!({
            "id": "7",
            "name": "Lead",
            "roles": ["manager"],
        }));
        let doc = document(serde_json::json!({
            "id": 10,
            "title": "Plan",
            "uploader": {"id": "7", "name": "Lead"},
        }));
        // The manager table entry includes documents-update, and the
        // ownership comparison matches as strings.
        assert!(has_permission(Some(&u), authz::DOCUMENTS_UPDATE));
        assert!(can_edit_document(Some(&u), &doc));
    }

    #[test]
    fn test_edit_delete_asymmetry_is_preserved() {
        // Recorded owner via the flat field, no roles, no permissions.
        let u = user(serde_json::json!({"id": 4, "name": "O", "roles": []}));
        let doc = document(serde_json::json!({
            "id": 11,
            "title": "Notes",
            "uploaded_by": "4",
        }));
        // Edit accepts the flat ownership fields.
        assert!(can_edit_document(Some(&u), &doc));
        // Delete keys on the nested uploader, absent here.
        assert!(!can_delete_document(Some(&u), &doc));
    }

    #[test]
    fn test_malformed_user_data_never_panics() {
        let u = user(serde_json::json!({
            "id": 9,
            "name": "Odd",
            "roles": [42, {"title": "no-name"}, null],
            "permissions": {"not": "a list"},
        }));
        let doc = document(serde_json::json!({"id": 1, "title": "t"}));
        assert!(!has_permission(Some(&u), authz::DOCUMENTS_VIEW));
        assert!(!has_role(Some(&u), "admin"));
        assert!(!can_edit_document(Some(&u), &doc));
        assert!(!can_delete_document(Some(&u), &doc));
    }
}
