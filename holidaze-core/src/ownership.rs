//! Decides whether the current user may manage a venue.
//!
//! The API's `owner` field cannot be trusted on its own, so the check runs
//! in two tiers:
//!
//! 1. Compare every identifier found in the owner field against every
//!    identifier of the user. Candidates match when one equals or contains
//!    the other. Substring matching tolerates the inconsistent shapes the API
//!    sends, and accepts that a short name may occasionally match an
//!    unrelated identifier.
//! 2. When the owner field is empty, ask the API which venues the user has
//!    created and look for this venue's id.
//!
//! Any failure in tier 2 counts as "not the owner".

use std::future::Future;

use crate::error::HolidazeResult;
use crate::model::{Identity, Profile, Venue};

/// Lists the ids of venues a user has created.
pub trait VenueLookup {
    fn venue_ids_for(&self, user: &Profile) -> impl Future<Output = HolidazeResult<Vec<String>>>;
}

/// True if `user` may edit, delete or view bookings for `venue`.
pub async fn can_manage<L: VenueLookup>(venue: &Venue, user: Option<&Profile>, lookup: &L) -> bool {
    let Some(user) = user else {
        return false;
    };

    if owner_matches(&venue.owner, user) {
        return true;
    }

    if !venue.owner.is_empty() {
        return false;
    }

    match lookup.venue_ids_for(user).await {
        Ok(ids) => {
            let venue_id = normalize(&venue.id);
            ids.iter().any(|id| normalize(id) == venue_id)
        }
        Err(e) => {
            tracing::warn!(venue = %venue.id, user = %user.name, "venue lookup failed, denying: {e}");
            false
        }
    }
}

/// Tier 1: does any owner candidate match any user candidate?
pub fn owner_matches(owner: &Identity, user: &Profile) -> bool {
    let owner_candidates = normalized(owner.candidates());
    if owner_candidates.is_empty() {
        return false;
    }

    let user_candidates = normalized(Identity::Record(user.identity()).candidates());

    owner_candidates.iter().any(|o| {
        user_candidates
            .iter()
            .any(|u| o == u || o.contains(u.as_str()) || u.contains(o.as_str()))
    })
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalized(candidates: Vec<String>) -> Vec<String> {
    candidates
        .iter()
        .map(|c| normalize(c))
        .filter(|c| !c.is_empty())
        .collect()
}
