//! Document endpoints: list, detail, download, create, update, delete.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::Result;
use crate::models::{AccessLevel, Document, Id};

use super::ApiClient;

/// Filter state of the document list screen.
///
/// Empty strings mean "no filter", matching the blank form controls they
/// mirror.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub search: String,
    pub category_id: String,
    pub department_id: String,
}

impl DocumentFilter {
    /// Render the query string, including the leading `?`.
    ///
    /// Parameters are appended in a fixed order and only when non-empty,
    /// so `search=invoice` with category `3` and no department filter
    /// yields exactly `?search=invoice&category_id=3`.
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        for (key, value) in [
            ("search", &self.search),
            ("category_id", &self.category_id),
            ("department_id", &self.department_id),
        ] {
            if !value.is_empty() {
                params.push(format!("{key}={}", urlencoding::encode(value)));
            }
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// A file attached to a document at creation time.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Multipart payload for `POST /documents`. Optional parts are omitted
/// entirely when absent.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub description: Option<String>,
    pub access_level: AccessLevel,
    pub category_id: Option<Id>,
    pub department_id: Option<Id>,
    pub file: Option<FileUpload>,
}

impl NewDocument {
    fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("title", self.title)
            .text("access_level", self.access_level.as_str());
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        if let Some(category_id) = self.category_id {
            form = form.text("category_id", category_id.to_string());
        }
        if let Some(department_id) = self.department_id {
            form = form.text("department_id", department_id.to_string());
        }
        if let Some(file) = self.file {
            let mut part = Part::bytes(file.data).file_name(file.file_name);
            if let Some(content_type) = &file.content_type {
                part = part.mime_str(content_type)?;
            }
            form = form.part("file", part);
        }
        Ok(form)
    }
}

/// JSON payload for `PUT /documents/:id`. All fields are sent, nulls
/// included, mirroring the edit form's full submit.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDocument {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<Id>,
    pub department_id: Option<Id>,
    pub access_level: Option<AccessLevel>,
}

impl ApiClient {
    /// `GET /documents` with the filter's query string.
    pub async fn list_documents(&self, token: &str, filter: &DocumentFilter) -> Result<Vec<Document>> {
        let path = format!("/documents{}", filter.query_string());
        self.send_enveloped(self.get(&path).bearer_auth(token)).await
    }

    /// `GET /documents/:id`.
    pub async fn get_document(&self, token: &str, id: &Id) -> Result<Document> {
        self.send_enveloped(self.get(&format!("/documents/{id}")).bearer_auth(token))
            .await
    }

    /// `GET /documents/:id/download`, returning the raw bytes.
    pub async fn download_document(&self, token: &str, id: &Id) -> Result<Vec<u8>> {
        let response = self
            .send(self.get(&format!("/documents/{id}/download")).bearer_auth(token))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST /documents` as multipart form data.
    pub async fn create_document(&self, token: &str, document: NewDocument) -> Result<Document> {
        let form = document.into_form()?;
        self.send_enveloped(self.post("/documents").bearer_auth(token).multipart(form))
            .await
    }

    /// `PUT /documents/:id`.
    pub async fn update_document(
        &self,
        token: &str,
        id: &Id,
        update: &UpdateDocument,
    ) -> Result<Document> {
        self.send_enveloped(
            self.put(&format!("/documents/{id}"))
                .bearer_auth(token)
                .json(update),
        )
        .await
    }

    /// `DELETE /documents/:id`.
    pub async fn delete_document(&self, token: &str, id: &Id) -> Result<()> {
        self.send(self.delete(&format!("/documents/{id}")).bearer_auth(token))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_omits_empty_filters() {
        let filter = DocumentFilter {
            search: "invoice".into(),
            category_id: "3".into(),
            department_id: String::new(),
        };
        assert_eq!(filter.query_string(), "?search=invoice&category_id=3");
    }

    #[test]
    fn test_query_string_empty_when_unfiltered() {
        assert_eq!(DocumentFilter::default().query_string(), "");
    }

    #[test]
    fn test_query_string_encodes_search_term() {
        let filter = DocumentFilter {
            search: "annual report".into(),
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "?search=annual%20report");
    }

    #[test]
    fn test_query_string_department_only() {
        let filter = DocumentFilter {
            department_id: "2".into(),
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "?department_id=2");
    }
}
