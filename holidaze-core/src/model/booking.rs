use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Identity, Venue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    #[serde(default)]
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Box<Venue>>,

    // Booker attribution, in whatever shape the API sent it
    #[serde(default)]
    pub user: Identity,
    #[serde(default)]
    pub booked_by: Identity,
    #[serde(default)]
    pub customer: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Booking {
    /// Display name carried by the embedded user (or customer) object.
    pub fn embedded_name(&self) -> Option<&str> {
        self.user.name().or_else(|| self.customer.name())
    }

    /// Identifiers that might name the booker, in lookup order, deduplicated.
    pub fn booker_candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();

        let mut push = |value: &str| {
            let value = value.trim();
            if !value.is_empty() && !candidates.iter().any(|c| c == value) {
                candidates.push(value.to_string());
            }
        };

        for identity in [&self.user, &self.booked_by] {
            push_identity(identity, &mut push);
        }
        for value in [&self.name, &self.email].into_iter().flatten() {
            push(value.as_str());
        }
        push_identity(&self.customer, &mut push);

        candidates
    }

    pub fn check_in(&self) -> NaiveDate {
        self.date_from.date_naive()
    }

    pub fn check_out(&self) -> NaiveDate {
        self.date_to.date_naive()
    }
}

fn push_identity(identity: &Identity, push: &mut impl FnMut(&str)) {
    match identity {
        Identity::Absent => {}
        Identity::Opaque(value) => push(value.as_str()),
        Identity::Record(record) => {
            for value in [&record.id, &record.name, &record.handle, &record.email]
                .into_iter()
                .flatten()
            {
                push(value.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(json: &str) -> Booking {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_candidates_follow_lookup_order() {
        let b = booking(
            r#"{
                "id": "b1",
                "dateFrom": "2026-07-01T00:00:00Z",
                "dateTo": "2026-07-02T00:00:00Z",
                "user": {"email": "carol@stud.noroff.no"},
                "bookedBy": "carol_k",
                "name": "carol_k",
                "customer": {"username": "ck"}
            }"#,
        );

        assert_eq!(b.embedded_name(), None);
        assert_eq!(
            b.booker_candidates(),
            vec!["carol@stud.noroff.no", "carol_k", "ck"]
        );
    }

    #[test]
    fn test_embedded_name_prefers_user_object() {
        let b = booking(
            r#"{
                "id": "b1",
                "dateFrom": "2026-07-01T00:00:00Z",
                "dateTo": "2026-07-02T00:00:00Z",
                "user": {"name": "Dana"},
                "customer": {"name": "someone_else"}
            }"#,
        );

        assert_eq!(b.embedded_name(), Some("Dana"));
        assert_eq!(b.check_in(), NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    }
}
