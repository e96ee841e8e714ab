use anyhow::Result;
use holidaze_core::display_name::DisplayNameResolver;
use owo_colors::OwoColorize;

use crate::context::Context;

pub async fn run(ctx: &Context, id: &str) -> Result<()> {
    let venue = ctx.managed_venue(id).await?;

    let mut bookings = ctx
        .load("Loading bookings", ctx.api.venue_bookings(&venue.id))
        .await??;

    if bookings.is_empty() {
        println!("{}", "No bookings for this venue yet.".dimmed());
        return Ok(());
    }

    bookings.sort_by_key(|b| b.date_from);

    // Fresh resolver per load: names are cached for this listing only
    let mut resolver = DisplayNameResolver::new(&ctx.api);
    let names = ctx
        .load("Resolving guests", resolver.resolve(&bookings))
        .await?;

    println!("Bookings for {}", venue.name.bold());
    for (booking, name) in bookings.iter().zip(names) {
        println!();
        println!("   {} {}", "User:".dimmed(), name);
        println!("   {} {}", "Guests:".dimmed(), booking.guests);
        println!("   {} {}", "Check-in:".dimmed(), booking.check_in());
        println!("   {} {}", "Check-out:".dimmed(), booking.check_out());
    }

    Ok(())
}
