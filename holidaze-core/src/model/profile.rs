use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Booking, IdentityRecord, Media, Venue};

/// A Holidaze profile. Also used as the session principal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
    #[serde(default)]
    pub venue_manager: bool,
    /// Registered as a manager but the API has not granted it yet.
    #[serde(default)]
    pub manager_request_pending: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub venues: Vec<Venue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookings: Vec<Booking>,
}

impl Profile {
    /// The profile's identifying fields as a record, for matching against
    /// loosely-shaped owner and booker references.
    pub fn identity(&self) -> IdentityRecord {
        let mut raw = Map::new();
        let fields = [
            ("id", self.id.as_deref()),
            ("_id", self.secondary_id.as_deref()),
            ("name", Some(self.name.as_str())),
            ("username", self.username.as_deref()),
            ("email", Some(self.email.as_str())),
        ];
        for (key, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                raw.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        IdentityRecord::from_map(raw)
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_ref().map(|a| a.url.as_str())
    }
}
