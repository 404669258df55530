//! Reference data endpoints: categories and departments.

use crate::error::Result;
use crate::models::{Category, Department};

use super::ApiClient;

impl ApiClient {
    /// `GET /categories`.
    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<Category>> {
        let mut request = self.get("/categories");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send_enveloped(request).await
    }

    /// `GET /departments`. Also served unauthenticated for the
    /// registration screen's department picker.
    pub async fn list_departments(&self, token: Option<&str>) -> Result<Vec<Department>> {
        let mut request = self.get("/departments");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send_enveloped(request).await
    }
}
