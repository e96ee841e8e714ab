//! TUI rendering traits for Holidaze types.
//!
//! Extension traits that add colored terminal rendering to holidaze-core
//! types using owo_colors.

use holidaze_core::model::{Booking, Profile, Venue};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Venue {
    fn render(&self) -> String {
        let guests = format!("{} {}", self.max_guests, pluralize("guest", self.max_guests as usize));
        format!(
            "🏠 {} {} {}",
            self.name.bold(),
            format!("${} / night · {}", format_price(self.price), guests).dimmed(),
            format!("[{}]", self.id).dimmed()
        )
    }
}

impl Render for Booking {
    fn render(&self) -> String {
        let dates = format!("{} → {}", self.check_in(), self.check_out());
        let guests = format!("{} {}", self.guests, pluralize("guest", self.guests as usize));

        match &self.venue {
            Some(venue) if !venue.name.is_empty() => {
                format!("📅 {} {} {}", venue.name.bold(), dates, guests.dimmed())
            }
            _ => format!("📅 {} {}", dates, guests.dimmed()),
        }
    }
}

impl Render for Profile {
    fn render(&self) -> String {
        let role = if self.venue_manager {
            "Venue manager".green().to_string()
        } else if self.manager_request_pending {
            "Venue manager (pending)".yellow().to_string()
        } else {
            "Guest".dimmed().to_string()
        };

        let mut lines = vec![
            format!("👤 {}", self.name.bold()),
            format!("   {}", self.email),
            format!("   {}", role),
        ];

        match self.avatar_url() {
            Some(url) => lines.push(format!("   Avatar: {}", url.dimmed())),
            None => lines.push(format!("   {}", "No avatar".dimmed())),
        }

        lines.join("\n")
    }
}

/// Full detail view of a single venue, including booked dates.
pub fn render_venue_detail(venue: &Venue) -> String {
    let mut lines = vec![venue.render()];

    if !venue.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("   {}", venue.description));
    }

    if let Some(image) = venue.cover_image() {
        lines.push(format!("   Image: {}", image.url.dimmed()));
    }

    if let Some(owner) = venue.owner.name() {
        lines.push(format!("   Owner: {}", owner));
    }

    lines.push(String::new());
    if venue.bookings.is_empty() {
        lines.push(format!("   {}", "No bookings yet, all dates available".dimmed()));
    } else {
        lines.push("   Booked dates:".dimmed().to_string());
        let mut bookings: Vec<_> = venue.bookings.iter().collect();
        bookings.sort_by_key(|b| b.date_from);
        for booking in bookings {
            lines.push(format!(
                "   {} {} → {}",
                "-".red(),
                booking.check_in(),
                booking.check_out()
            ));
        }
    }

    lines.join("\n")
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
