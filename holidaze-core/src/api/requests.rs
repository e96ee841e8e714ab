//! Request bodies, with the checks worth doing before hitting the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_range::StayRange;
use crate::error::{HolidazeError, HolidazeResult};
use crate::model::{Media, Profile};

/// Only student accounts may register.
pub const REGISTRATION_EMAIL_DOMAIN: &str = "@stud.noroff.no";

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub venue_manager: bool,
}

impl RegisterRequest {
    pub fn validate(&self) -> HolidazeResult<()> {
        if self.name.trim().is_empty() {
            return Err(HolidazeError::Validation("Name is required.".into()));
        }
        if !self.email.to_lowercase().ends_with(REGISTRATION_EMAIL_DOMAIN) {
            return Err(HolidazeError::Validation(format!(
                "Only {REGISTRATION_EMAIL_DOMAIN} emails may register."
            )));
        }
        if self.password.is_empty() {
            return Err(HolidazeError::Validation("Password is required.".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login payload: the profile plus its bearer credential.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub profile: Profile,
}

/// Fields for creating or updating a venue.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
}

impl VenueForm {
    /// Creation needs every required field.
    pub fn validate_new(&self) -> HolidazeResult<()> {
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(HolidazeError::Validation("Venue name is required.".into()));
        }
        if self.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
            return Err(HolidazeError::Validation("Description is required.".into()));
        }
        if self.price.is_none() {
            return Err(HolidazeError::Validation("Price is required.".into()));
        }
        self.validate_update()
    }

    pub fn validate_update(&self) -> HolidazeResult<()> {
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(HolidazeError::Validation("Price must be a positive number.".into()));
        }
        if self.max_guests == Some(0) {
            return Err(HolidazeError::Validation("A venue must fit at least one guest.".into()));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.max_guests.is_none()
            && self.media.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub venue_id: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
}

impl BookingRequest {
    pub fn new(venue_id: &str, stay: &StayRange, guests: u32) -> HolidazeResult<Self> {
        if guests == 0 {
            return Err(HolidazeError::Validation("At least one guest is required.".into()));
        }
        Ok(BookingRequest {
            venue_id: venue_id.to_string(),
            date_from: stay.from_utc(),
            date_to: stay.to_utc(),
            guests,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarUpdate {
    pub avatar: Media,
}

impl AvatarUpdate {
    /// Accepts direct image URLs only.
    pub fn new(url: &str) -> HolidazeResult<Self> {
        let url = url.trim();
        let lower = url.to_lowercase();
        let is_http = lower.starts_with("http://") || lower.starts_with("https://");

        if !is_http || !IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            return Err(HolidazeError::Validation(
                "Please enter a valid direct image URL ending with .jpg, .png, .gif, or .webp".into(),
            ));
        }

        Ok(AvatarUpdate {
            avatar: Media::new(url, None),
        })
    }
}
