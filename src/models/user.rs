//! User model, entity ids and role normalization.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Entity identifier.
///
/// The backend emits ids as JSON numbers or strings depending on the
/// endpoint. `Id` accepts both shapes and compares by string value, so
/// ownership checks like `user.id == document.uploader.id` hold across
/// mixed representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Normalized set of role names held by a user.
///
/// The backend emits roles as a bare string (`"manager"`), a list of
/// strings, or a list of objects carrying a `name` field. All shapes
/// normalize here, once, so no caller ever inspects the raw value.
/// Entries of any other shape are dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roles(Vec<String>);

impl Roles {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Case-sensitive exact membership test.
    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|name| name == role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(name) => Self(vec![name.clone()]),
            serde_json::Value::Array(entries) => Self(
                entries
                    .iter()
                    .filter_map(|entry| match entry {
                        serde_json::Value::String(name) => Some(name.clone()),
                        serde_json::Value::Object(fields) => fields
                            .get("name")
                            .and_then(serde_json::Value::as_str)
                            .map(str::to_string),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self(Vec::new()),
        }
    }
}

impl<V: Into<String>> FromIterator<V> for Roles {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for Roles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Roles::from_value(&value))
    }
}

/// Authenticated user as persisted in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department_id: Option<Id>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub roles: Roles,
    /// Explicit permission grants. When present this list is the sole
    /// source of truth for [`crate::authz::has_permission`]; the role
    /// table is never consulted.
    #[serde(default, deserialize_with = "de_permissions")]
    pub permissions: Option<Vec<String>>,
}

/// Accept only a JSON array for `permissions`; string entries are kept,
/// anything else (null, scalar, malformed entries) degrades to absent.
fn de_permissions<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(entries)) => Some(
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_and_string() {
        let from_number: Id = serde_json::from_str("7").unwrap();
        let from_string: Id = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "7");
    }

    #[test]
    fn test_roles_from_bare_string() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Ana","roles":"manager"}"#).unwrap();
        assert!(user.roles.contains("manager"));
        assert!(!user.roles.contains("admin"));
    }

    #[test]
    fn test_roles_from_list_of_strings_and_objects() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Ana","roles":[{"name":"manager","guard":"web"},"employee"]}"#,
        )
        .unwrap();
        assert!(user.roles.contains("manager"));
        assert!(user.roles.contains("employee"));
    }

    #[test]
    fn test_roles_case_sensitive() {
        let roles: Roles = ["Manager"].into_iter().collect();
        assert!(!roles.contains("manager"));
    }

    #[test]
    fn test_malformed_roles_degrade_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Ana","roles":42}"#).unwrap();
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_permissions_non_array_degrades_to_absent() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Ana","roles":["admin"],"permissions":"documents-view"}"#,
        )
        .unwrap();
        assert!(user.permissions.is_none());
    }

    #[test]
    fn test_roles_survive_session_round_trip() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Ana","roles":[{"name":"admin"}]}"#).unwrap();
        let persisted = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&persisted).unwrap();
        assert!(restored.roles.contains("admin"));
    }
}
