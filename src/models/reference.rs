//! Reference data: categories and departments.

use serde::{Deserialize, Serialize};

use super::user::Id;

/// Document category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub title: String,
}

/// Organizational department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Id,
    pub name: String,
}
