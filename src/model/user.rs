use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized directory entry. Serialized with camelCase keys to match the
/// on-disk and wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// The loosely-typed on-disk shape. Tolerates string-typed ids and legacy
/// records that carry a combined `name` field instead of firstName/lastName.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Total normalization: every raw object maps to a record, with explicit
    /// fallbacks for absent or malformed fields.
    pub fn from_raw(raw: RawUser) -> User {
        let (legacy_first, legacy_last) = split_legacy_name(raw.name.as_deref());
        User {
            id: coerce_stored_id(raw.id.as_ref()),
            first_name: raw.first_name.unwrap_or(legacy_first),
            last_name: raw.last_name.unwrap_or(legacy_last),
            username: raw.username.unwrap_or_default(),
            email: raw.email.unwrap_or_default(),
        }
    }
}

/// Stored ids: strings are parsed, numbers are taken as-is, everything else
/// defaults to 0.
fn coerce_stored_id(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        _ => 0,
    }
}

/// Splits a legacy `name` field on the first space into (firstName, lastName).
fn split_legacy_name(name: Option<&str>) -> (String, String) {
    match name {
        Some(name) => {
            let mut parts = name.splitn(2, ' ');
            let first = parts.next().unwrap_or_default().to_string();
            let last = parts.next().unwrap_or_default().to_string();
            (first, last)
        }
        None => (String::new(), String::new()),
    }
}
