use anyhow::Result;
use clap::Args;
use dialoguer::{Confirm, Input};
use holidaze_core::api::VenueForm;
use holidaze_core::model::{Media, Venue};
use holidaze_core::ownership::can_manage;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::{Render, render_venue_detail};

/// Guest capacity used when none is given on creation.
const DEFAULT_MAX_GUESTS: u32 = 4;

#[derive(Args, Debug, Default)]
pub struct VenueFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price per night
    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub max_guests: Option<u32>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl VenueFields {
    fn into_form(self) -> VenueForm {
        VenueForm {
            name: self.name,
            description: self.description,
            price: self.price,
            max_guests: self.max_guests,
            media: self
                .image
                .filter(|url| !url.trim().is_empty())
                .map(|url| vec![Media::new(url.trim(), None)]),
        }
    }
}

pub async fn show(ctx: &Context, id: &str) -> Result<()> {
    let venue = ctx.load("Loading venue", ctx.api.venue(id)).await??;

    println!("{}", render_venue_detail(&venue));

    if ctx.user().is_some() {
        let manages = ctx
            .load("Checking permissions", can_manage(&venue, ctx.user(), &ctx.api))
            .await?;
        if manages {
            println!();
            println!(
                "{}",
                format!("You manage this venue: holidaze venue edit {}", venue.id).dimmed()
            );
        }
    }

    Ok(())
}

pub async fn create(ctx: &Context, fields: VenueFields) -> Result<()> {
    let user = ctx.require_user()?;
    if !user.venue_manager {
        anyhow::bail!("Only venue managers can create venues.");
    }

    let interactive = fields.name.is_none();
    let mut form = fields.into_form();

    if interactive {
        form.name = Some(Input::<String>::new().with_prompt("  Name").interact_text()?);
        form.description = Some(
            Input::<String>::new()
                .with_prompt("  Description")
                .interact_text()?,
        );
        form.price = Some(
            Input::<f64>::new()
                .with_prompt("  Price per night")
                .interact_text()?,
        );
        let image: String = Input::new()
            .with_prompt("  Image URL (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if !image.trim().is_empty() {
            form.media = Some(vec![Media::new(image.trim(), None)]);
        }
    }

    if form.max_guests.is_none() {
        form.max_guests = Some(DEFAULT_MAX_GUESTS);
    }

    let venue = ctx.load("Creating venue", ctx.api.create_venue(&form)).await??;

    if interactive {
        println!();
    }
    println!("{}", "Venue created successfully!".green());
    println!("{}", venue.render());

    Ok(())
}

pub async fn edit(ctx: &Context, id: &str, fields: VenueFields) -> Result<()> {
    let venue = ctx.managed_venue(id).await?;

    let mut form = fields.into_form();
    if form.is_empty() {
        form = prompt_edit(&venue)?;
    }

    let updated = ctx
        .load("Updating venue", ctx.api.update_venue(&venue.id, &form))
        .await??;

    println!("{}", "Venue updated".green());
    println!("{}", updated.render());

    Ok(())
}

/// Prompt for the editable fields, prefilled with the current values.
fn prompt_edit(venue: &Venue) -> Result<VenueForm> {
    let name: String = Input::new()
        .with_prompt("  Name")
        .with_initial_text(venue.name.clone())
        .interact_text()?;
    let price: f64 = Input::new()
        .with_prompt("  Price per night")
        .default(venue.price)
        .interact_text()?;
    let description: String = Input::new()
        .with_prompt("  Description")
        .with_initial_text(venue.description.clone())
        .interact_text()?;

    Ok(VenueForm {
        name: Some(name),
        description: Some(description),
        price: Some(price),
        ..Default::default()
    })
}

pub async fn delete(ctx: &Context, id: &str, force: bool) -> Result<()> {
    let venue = ctx.managed_venue(id).await?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {}?", venue.name))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    ctx.load("Deleting venue", ctx.api.delete_venue(&venue.id))
        .await??;

    println!("{} {}", "Deleted".red(), venue.name);

    Ok(())
}
