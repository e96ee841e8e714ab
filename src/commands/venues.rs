use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub async fn run(ctx: &Context) -> Result<()> {
    let venues = ctx.load("Loading venues", ctx.api.venues()).await??;

    if venues.is_empty() {
        println!("{}", "No venues found".dimmed());
        return Ok(());
    }

    for venue in &venues {
        println!("{}", venue.render());
    }

    Ok(())
}
