use anyhow::Result;
use holidaze_core::api::ProfileInclude;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub async fn run(ctx: &Context) -> Result<()> {
    let user = ctx.require_user()?;

    let profile = ctx
        .load(
            "Loading bookings",
            ctx.api.profile(&user.name, ProfileInclude::Bookings),
        )
        .await??;

    if profile.bookings.is_empty() {
        println!("{}", "No bookings yet.".dimmed());
        return Ok(());
    }

    let mut bookings = profile.bookings;
    bookings.sort_by_key(|b| b.date_from);

    for booking in &bookings {
        println!("{}", booking.render());
    }

    Ok(())
}
