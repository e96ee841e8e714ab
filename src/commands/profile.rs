use anyhow::Result;
use holidaze_core::api::ProfileInclude;
use holidaze_core::session::Session;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub async fn show(ctx: &Context) -> Result<()> {
    let user = ctx.require_user()?;

    println!("{}", user.render());
    println!();

    let result = ctx
        .load(
            "Loading your venues",
            ctx.api.profile(&user.name, ProfileInclude::Venues),
        )
        .await?;

    match result {
        Ok(profile) if profile.venues.is_empty() => {
            println!("{}", "You don't have any venues yet.".dimmed());
        }
        Ok(profile) => {
            println!("Your venues:");
            for venue in &profile.venues {
                println!("   {}", venue.render());
            }
        }
        Err(e) => println!("   {}", e.to_string().red()),
    }

    if user.venue_manager {
        println!();
        println!(
            "{}",
            "Create a new venue with: holidaze venue create".dimmed()
        );
    }

    Ok(())
}

pub async fn avatar(ctx: &Context, url: &str) -> Result<()> {
    let session = ctx
        .session
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("You must be logged in to update your avatar."))?;

    let profile = ctx
        .load(
            "Updating avatar",
            ctx.api.update_avatar(&session.user.name, url),
        )
        .await??;

    // Keep the saved session in step with the new avatar
    let mut user = session.user.clone();
    user.avatar = profile.avatar;
    Session::new(session.access_token().to_string(), user).save()?;

    println!("{}", "Avatar updated successfully!".green());

    Ok(())
}
