//! The logged-in session: bearer credential plus the user it belongs to.
//!
//! Sessions are passed around explicitly. They are persisted to
//! ~/.config/holidaze/session.toml between CLI invocations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::base_dir;
use crate::error::{HolidazeError, HolidazeResult};
use crate::model::Profile;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    access_token: String,
    pub user: Profile,
}

impl Session {
    pub fn new(access_token: String, user: Profile) -> Self {
        Session { access_token, user }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn path() -> HolidazeResult<PathBuf> {
        Ok(base_dir()?.join("session.toml"))
    }

    /// Load the saved session, if any.
    pub fn load() -> HolidazeResult<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// A session file that no longer parses counts as logged out.
    pub fn load_from(path: &Path) -> HolidazeResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            HolidazeError::Session(format!("Failed to read session from {}: {e}", path.display()))
        })?;

        match toml::from_str(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session");
                Ok(None)
            }
        }
    }

    pub fn save(&self) -> HolidazeResult<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> HolidazeResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| HolidazeError::Serialization(format!("Failed to serialize session: {e}")))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        // Owner-only (0600): the file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Remove the saved session. Missing files are not an error.
    pub fn clear() -> HolidazeResult<()> {
        Self::clear_at(&Self::path()?)
    }

    pub fn clear_at(path: &Path) -> HolidazeResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
