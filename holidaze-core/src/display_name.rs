//! Resolves who made each booking when listing bookings to a venue owner.
//!
//! Bookings rarely carry a usable name. For each booking without one, the
//! candidate identifiers are tried in order: a candidate containing
//! whitespace is taken as a full name as-is, anything else is looked up via
//! the profile API. Lookups are cached for the lifetime of one
//! `DisplayNameResolver`, misses included.

use std::collections::HashMap;
use std::future::Future;

use futures::future::join_all;

use crate::error::HolidazeResult;
use crate::model::Booking;

pub const UNKNOWN: &str = "Unknown";

/// Looks a candidate identifier up and returns the profile's display name.
/// `Ok(None)` means no such profile.
pub trait ProfileLookup {
    fn display_name(&self, candidate: &str) -> impl Future<Output = HolidazeResult<Option<String>>>;
}

/// One resolution pass. Build a new resolver per venue-bookings load.
pub struct DisplayNameResolver<'a, L> {
    lookup: &'a L,
    cache: HashMap<String, Option<String>>,
}

impl<'a, L: ProfileLookup> DisplayNameResolver<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        DisplayNameResolver {
            lookup,
            cache: HashMap::new(),
        }
    }

    /// Display names for `bookings`, in the same order.
    ///
    /// Works in rounds: every unresolved booking offers its next candidate,
    /// the distinct uncached ones are looked up concurrently, and the cache
    /// is only updated once the whole round has settled.
    pub async fn resolve(&mut self, bookings: &[Booking]) -> Vec<String> {
        let mut names: Vec<Option<String>> = bookings
            .iter()
            .map(|b| b.embedded_name().map(str::to_string))
            .collect();

        let candidates: Vec<Vec<String>> = bookings.iter().map(Booking::booker_candidates).collect();
        let mut cursor = vec![0usize; bookings.len()];

        loop {
            let mut pending: Vec<String> = Vec::new();

            for (i, name) in names.iter_mut().enumerate() {
                while name.is_none() {
                    let Some(candidate) = candidates[i].get(cursor[i]) else {
                        break;
                    };

                    if candidate.contains(char::is_whitespace) {
                        *name = Some(candidate.clone());
                        break;
                    }

                    match self.cache.get(candidate) {
                        Some(Some(resolved)) => *name = Some(resolved.clone()),
                        Some(None) => cursor[i] += 1,
                        None => {
                            if !pending.contains(candidate) {
                                pending.push(candidate.clone());
                            }
                            break;
                        }
                    }
                }
            }

            if pending.is_empty() {
                break;
            }

            let results = join_all(pending.iter().map(|c| self.lookup_one(c))).await;
            self.cache.extend(pending.into_iter().zip(results));
        }

        names
            .into_iter()
            .map(|n| n.unwrap_or_else(|| UNKNOWN.to_string()))
            .collect()
    }

    async fn lookup_one(&self, candidate: &str) -> Option<String> {
        match self.lookup.display_name(candidate).await {
            Ok(Some(name)) if !name.trim().is_empty() => Some(name),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(candidate, "profile lookup failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HolidazeError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLookup {
        known: HashMap<&'static str, &'static str>,
        failing: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingLookup {
        fn with(known: &[(&'static str, &'static str)]) -> Self {
            RecordingLookup {
                known: known.iter().copied().collect(),
                ..Default::default()
            }
        }

        fn calls_for(&self, candidate: &str) -> usize {
            self.calls.borrow().iter().filter(|c| *c == candidate).count()
        }
    }

    impl ProfileLookup for RecordingLookup {
        async fn display_name(&self, candidate: &str) -> HolidazeResult<Option<String>> {
            self.calls.borrow_mut().push(candidate.to_string());
            if self.failing.iter().any(|f| *f == candidate) {
                return Err(HolidazeError::Status(503));
            }
            Ok(self.known.get(candidate).map(|n| n.to_string()))
        }
    }

    fn booking(id: &str, booker: serde_json::Value) -> Booking {
        let mut json = serde_json::json!({
            "id": id,
            "dateFrom": "2026-07-01T00:00:00Z",
            "dateTo": "2026-07-02T00:00:00Z",
            "guests": 1
        });
        if let (Some(target), Some(fields)) = (json.as_object_mut(), booker.as_object()) {
            target.extend(fields.clone());
        }
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_embedded_name_skips_lookup() {
        let lookup = RecordingLookup::with(&[]);
        let mut resolver = DisplayNameResolver::new(&lookup);

        let names = resolver
            .resolve(&[booking("b1", serde_json::json!({"user": {"name": "alice", "email": "a@x.no"}}))])
            .await;

        assert_eq!(names, vec!["alice"]);
        assert!(lookup.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_full_name_candidate_used_directly() {
        let lookup = RecordingLookup::with(&[]);
        let mut resolver = DisplayNameResolver::new(&lookup);

        let names = resolver
            .resolve(&[booking("b1", serde_json::json!({"bookedBy": "Carol King"}))])
            .await;

        assert_eq!(names, vec!["Carol King"]);
        assert!(lookup.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_same_candidate_looked_up_once() {
        let lookup = RecordingLookup::with(&[("dana", "Dana")]);
        let mut resolver = DisplayNameResolver::new(&lookup);

        let bookings = [
            booking("b1", serde_json::json!({"user": "dana"})),
            booking("b2", serde_json::json!({"customer": {"username": "dana"}})),
        ];

        assert_eq!(resolver.resolve(&bookings).await, vec!["Dana", "Dana"]);
        assert_eq!(resolver.resolve(&bookings).await, vec!["Dana", "Dana"]);
        assert_eq!(lookup.calls_for("dana"), 1);
    }

    #[tokio::test]
    async fn test_misses_are_cached_and_next_candidate_tried() {
        let lookup = RecordingLookup::with(&[("erin", "Erin")]);
        let mut resolver = DisplayNameResolver::new(&lookup);

        let bookings = [
            booking("b1", serde_json::json!({"email": "ghost@x.no", "customer": {"name": "erin"}})),
            booking("b2", serde_json::json!({"email": "ghost@x.no"})),
        ];

        // b1's customer name counts as embedded, so only b2 needs resolving
        assert_eq!(resolver.resolve(&bookings).await, vec!["erin", UNKNOWN]);

        let bookings = [
            booking("b3", serde_json::json!({"email": "ghost@x.no", "bookedBy": "erin"})),
            booking("b4", serde_json::json!({"user": "ghost@x.no"})),
        ];

        assert_eq!(resolver.resolve(&bookings).await, vec!["Erin", UNKNOWN]);
        assert_eq!(lookup.calls_for("ghost@x.no"), 1);
        assert_eq!(lookup.calls_for("erin"), 1);
    }

    #[tokio::test]
    async fn test_failed_lookup_resolves_to_unknown() {
        let lookup = RecordingLookup {
            failing: vec!["frank"],
            ..Default::default()
        };
        let mut resolver = DisplayNameResolver::new(&lookup);

        let names = resolver
            .resolve(&[booking("b1", serde_json::json!({"user": "frank"})), booking("b2", serde_json::json!({}))])
            .await;

        assert_eq!(names, vec![UNKNOWN, UNKNOWN]);
        assert_eq!(lookup.calls_for("frank"), 1);
    }
}
