//! Loosely-shaped identity references.
//!
//! The API attributes venues and bookings to people inconsistently: the
//! `owner` of a venue may be missing, a name, a profile URL, or an embedded
//! profile object, and booker fields behave the same way. `Identity` keeps
//! whichever shape arrived instead of coercing it.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Identity {
    #[default]
    Absent,
    /// A bare identifier: a name, an email or a URL-like path.
    Opaque(String),
    Record(IdentityRecord),
}

/// An embedded profile-like object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityRecord {
    pub id: Option<String>,
    /// Secondary identifier (`_id`) some records carry.
    pub secondary_id: Option<String>,
    pub name: Option<String>,
    /// Login handle (`username`).
    pub handle: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    raw: Map<String, Value>,
}

impl IdentityRecord {
    pub fn from_map(raw: Map<String, Value>) -> Self {
        IdentityRecord {
            id: string_field(&raw, "id"),
            secondary_id: string_field(&raw, "_id"),
            name: string_field(&raw, "name"),
            handle: string_field(&raw, "username"),
            email: string_field(&raw, "email"),
            url: string_field(&raw, "url"),
            raw,
        }
    }

    /// Identifying fields in priority order, skipping absent ones.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            &self.id,
            &self.secondary_id,
            &self.name,
            &self.handle,
            &self.email,
            &self.url,
        ]
        .into_iter()
        .filter_map(|f| f.as_deref())
    }

    /// Stable serialization of the whole record, top-level keys sorted.
    pub fn serialized(&self) -> String {
        let sorted: BTreeMap<&String, &Value> = self.raw.iter().collect();
        serde_json::to_string(&sorted).unwrap_or_default()
    }

    fn is_empty(&self) -> bool {
        self.fields().all(|f| f.trim().is_empty())
    }
}

impl Identity {
    /// True when the field carries nothing usable.
    pub fn is_empty(&self) -> bool {
        match self {
            Identity::Absent => true,
            Identity::Opaque(s) => s.trim().is_empty(),
            Identity::Record(record) => record.is_empty(),
        }
    }

    pub fn as_record(&self) -> Option<&IdentityRecord> {
        match self {
            Identity::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The embedded display name, if this is a record that has one.
    pub fn name(&self) -> Option<&str> {
        self.as_record()
            .and_then(|r| r.name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }

    /// Raw identifier candidates, not yet normalized.
    ///
    /// - opaque values are used as-is, plus their last path segment when
    ///   they look like a path
    /// - records yield every identifying field plus their serialization
    pub fn candidates(&self) -> Vec<String> {
        match self {
            Identity::Absent => Vec::new(),
            Identity::Opaque(value) => {
                let mut candidates = vec![value.clone()];
                if value.contains('/') {
                    if let Some(segment) = value
                        .trim_end_matches('/')
                        .rsplit('/')
                        .next()
                        .filter(|s| !s.is_empty())
                    {
                        candidates.push(segment.to_string());
                    }
                }
                candidates
            }
            Identity::Record(record) => {
                let mut candidates: Vec<String> = record.fields().map(str::to_string).collect();
                candidates.push(record.serialized());
                candidates
            }
        }
    }
}

impl From<Value> for Identity {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Identity::Absent,
            Value::String(s) => Identity::Opaque(s),
            Value::Object(map) => Identity::Record(IdentityRecord::from_map(map)),
            other => Identity::Opaque(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Identity::from)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identity::Absent => serializer.serialize_none(),
            Identity::Opaque(s) => serializer.serialize_str(s),
            Identity::Record(record) => record.raw.serialize(serializer),
        }
    }
}

/// Read a field as a string, stringifying numbers and booleans.
fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
