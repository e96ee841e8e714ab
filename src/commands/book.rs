use anyhow::Result;
use holidaze_core::api::BookingRequest;
use holidaze_core::date_range::StayRange;
use holidaze_core::model::Venue;
use owo_colors::OwoColorize;

use crate::context::Context;

pub async fn run(
    ctx: &Context,
    venue_id: &str,
    from: &str,
    to: Option<&str>,
    guests: u32,
) -> Result<()> {
    if ctx.user().is_none() {
        anyhow::bail!("You must be logged in to book.");
    }

    let stay = StayRange::from_args(from, to).map_err(|e| anyhow::anyhow!(e))?;
    let request = BookingRequest::new(venue_id, &stay, guests)?;

    let venue = ctx.load("Checking availability", ctx.api.venue(venue_id)).await??;

    check_availability(&venue, &stay, guests)?;

    let booking = ctx
        .load("Booking", ctx.api.create_booking(&request))
        .await??;

    println!("{}", "Booking successful!".green());
    println!(
        "   {} {} → {} ({} {})",
        venue.name.bold(),
        booking.check_in(),
        booking.check_out(),
        booking.guests,
        if booking.guests == 1 { "guest" } else { "guests" }
    );

    Ok(())
}

/// Reject stays over the venue's capacity or overlapping an existing booking.
fn check_availability(venue: &Venue, stay: &StayRange, guests: u32) -> Result<()> {
    if venue.max_guests > 0 && guests > venue.max_guests {
        anyhow::bail!(
            "{} fits at most {} guests.",
            venue.name,
            venue.max_guests
        );
    }

    if let Some(conflict) = stay.conflict(&venue.bookings) {
        anyhow::bail!(
            "Those dates are not available: already booked {} → {}.",
            conflict.check_in(),
            conflict.check_out()
        );
    }

    Ok(())
}
