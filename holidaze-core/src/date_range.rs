//! Stay date ranges for bookings.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::Booking;

/// A requested stay, by calendar day.
///
/// A stay occupies the nights from `from` up to (not including) `to`.
/// A same-day range (`from == to`) occupies the single night of `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl StayRange {
    /// Parse YYYY-MM-DD arguments. `to` defaults to `from`.
    pub fn from_args(from: &str, to: Option<&str>) -> Result<Self, String> {
        let from = parse_date(from)?;
        let to = match to {
            Some(s) => parse_date(s)?,
            None => from,
        };
        Self::new(from, to)
    }

    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, String> {
        if to < from {
            return Err(format!("Check-out ({to}) is before check-in ({from})"));
        }
        Ok(StayRange { from, to })
    }

    /// Range covered by an existing booking.
    pub fn of_booking(booking: &Booking) -> Self {
        let from = booking.check_in();
        StayRange {
            from,
            to: booking.check_out().max(from),
        }
    }

    /// First night not covered by the stay.
    fn end_exclusive(&self) -> NaiveDate {
        if self.to == self.from {
            self.from + Duration::days(1)
        } else {
            self.to
        }
    }

    pub fn nights(&self) -> i64 {
        (self.end_exclusive() - self.from).num_days()
    }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.from < other.end_exclusive() && other.from < self.end_exclusive()
    }

    /// The first existing booking this stay would collide with.
    pub fn conflict<'a>(&self, bookings: &'a [Booking]) -> Option<&'a Booking> {
        bookings
            .iter()
            .find(|b| self.overlaps(&StayRange::of_booking(b)))
    }

    /// `from` as start of day in UTC
    pub fn from_utc(&self) -> DateTime<Utc> {
        start_of_day(self.from)
    }

    /// `to` as start of day in UTC
    pub fn to_utc(&self) -> DateTime<Utc> {
        start_of_day(self.to)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(from: &str, to: &str) -> StayRange {
        StayRange::new(day(from), day(to)).unwrap()
    }

    #[test]
    fn test_from_args_defaults_to_single_day() {
        let stay = StayRange::from_args("2026-07-01", None).unwrap();
        assert_eq!(stay.from, stay.to);
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn test_from_args_rejects_bad_input() {
        assert!(StayRange::from_args("01/07/2026", None).is_err());
        assert!(StayRange::from_args("2026-07-05", Some("2026-07-01")).is_err());
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        let first = range("2026-07-01", "2026-07-03");
        let second = range("2026-07-03", "2026-07-05");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn test_overlapping_stays() {
        let stay = range("2026-07-01", "2026-07-04");
        assert!(stay.overlaps(&range("2026-07-03", "2026-07-06")));
        assert!(stay.overlaps(&range("2026-07-02", "2026-07-02")));
        assert!(!stay.overlaps(&range("2026-07-04", "2026-07-04")));
    }

    #[test]
    fn test_conflict_finds_existing_booking() {
        let bookings: Vec<Booking> = serde_json::from_str(
            r#"[
                {"id": "b1", "dateFrom": "2026-07-01T00:00:00Z", "dateTo": "2026-07-03T00:00:00Z", "guests": 2},
                {"id": "b2", "dateFrom": "2026-07-10T00:00:00Z", "dateTo": "2026-07-12T00:00:00Z", "guests": 1}
            ]"#,
        )
        .unwrap();

        let stay = range("2026-07-11", "2026-07-13");
        assert_eq!(stay.conflict(&bookings).map(|b| b.id.as_str()), Some("b2"));

        let free = range("2026-07-03", "2026-07-10");
        assert!(free.conflict(&bookings).is_none());
    }
}
