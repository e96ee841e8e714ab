//! Venue manager requests that the API has not granted yet.
//!
//! Registering with `venueManager: true` can come back as a plain guest
//! account. The email is remembered in ~/.config/holidaze/manager_requests.toml
//! so a later login can mark the profile as pending.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::base_dir;
use crate::error::{HolidazeError, HolidazeResult};
use crate::model::Profile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagerRequests {
    #[serde(default)]
    emails: BTreeSet<String>,
}

impl ManagerRequests {
    pub fn path() -> HolidazeResult<PathBuf> {
        Ok(base_dir()?.join("manager_requests.toml"))
    }

    pub fn load() -> HolidazeResult<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Missing or unparseable files load as empty.
    pub fn load_from(path: &Path) -> HolidazeResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(requests) => Ok(requests),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable manager requests");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> HolidazeResult<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> HolidazeResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            HolidazeError::Serialization(format!("Failed to serialize manager requests: {e}"))
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Remember the request when registration did not grant manager access.
    /// Returns whether anything changed.
    pub fn record_registration(&mut self, requested: bool, profile: &Profile) -> bool {
        if !requested || profile.venue_manager {
            return false;
        }
        self.emails.insert(normalize(&profile.email))
    }

    /// Set `manager_request_pending` on a freshly logged-in profile. A granted
    /// request is forgotten. Returns whether the stored set changed.
    pub fn apply(&mut self, profile: &mut Profile) -> bool {
        let email = normalize(&profile.email);

        if profile.venue_manager {
            profile.manager_request_pending = false;
            return self.emails.remove(&email);
        }

        profile.manager_request_pending = self.emails.contains(&email);
        false
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
