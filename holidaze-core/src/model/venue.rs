use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Booking, Identity, Media};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub media: Vec<Media>,
    /// Declared owner. Unreliable: often missing or inconsistently shaped.
    #[serde(default)]
    pub owner: Identity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookings: Vec<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Venue {
    pub fn cover_image(&self) -> Option<&Media> {
        self.media.first()
    }
}
