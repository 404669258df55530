//! Document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::user::Id;

/// Document visibility scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Visible to all employees
    Public,
    /// Visible only to department members
    Department,
    /// Visible only to admin and uploader
    Private,
}

impl AccessLevel {
    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "department" => Some(Self::Department),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Department => "department",
            Self::Private => "private",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Department => "Department",
            Self::Private => "Private",
        }
    }

    /// Long-form description shown next to the access level choices.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Public => "Public – Visible to all employees",
            Self::Department => "Department – Visible only to department members",
            Self::Private => "Private – Visible only to admin and uploader",
        }
    }
}

/// The user recorded as a document's uploader at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uploader {
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
}

/// Document entity.
///
/// Ownership fields appear in three shapes depending on the endpoint:
/// a nested `uploader` object, a flat `uploaded_by` id, or a flat
/// `uploader_id` id. `department_id` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<Id>,
    #[serde(default)]
    pub department_id: Option<Id>,
    #[serde(default, deserialize_with = "de_access_level")]
    pub access_level: Option<AccessLevel>,
    #[serde(default)]
    pub uploader: Option<Uploader>,
    #[serde(default)]
    pub uploaded_by: Option<Id>,
    #[serde(default)]
    pub uploader_id: Option<Id>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default, deserialize_with = "de_count")]
    pub download_count: u64,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Unknown or non-string access levels degrade to absent rather than
/// failing the whole document.
fn de_access_level<'de, D>(deserializer: D) -> Result<Option<AccessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(AccessLevel::from_str_loose))
}

/// `download_count` may be absent, null or malformed; all count as zero.
fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0))
}

/// Timestamps outside RFC 3339 degrade to absent.
fn de_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc)))
}
