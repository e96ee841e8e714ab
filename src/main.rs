mod commands;
mod context;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::context::Context;

#[derive(Parser)]
#[command(name = "holidaze")]
#[command(about = "Browse Holidaze venues, book stays and manage your own venues")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Holidaze account (student emails only)
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Register as a venue manager
        #[arg(long)]
        manager: bool,
    },
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    Logout,
    /// List all venues
    Venues,
    Venue {
        #[command(subcommand)]
        command: VenueCommands,
    },
    /// Book a stay at a venue
    Book {
        venue_id: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Check-out date (YYYY-MM-DD), defaults to the check-in date
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        guests: u32,
    },
    /// List your own bookings
    Bookings,
    /// Show your profile and the venues you manage
    Profile,
    /// Change your avatar image
    Avatar { url: String },
}

#[derive(Subcommand)]
enum VenueCommands {
    Show {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: commands::venue::VenueFields,
    },
    Edit {
        id: String,

        #[command(flatten)]
        fields: commands::venue::VenueFields,
    },
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List bookings on a venue you manage
    Bookings {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Logout must work even when the saved state is unusable
    if let Commands::Logout = cli.command {
        return commands::auth::logout();
    }

    let ctx = Context::init()?;

    match cli.command {
        Commands::Register {
            name,
            email,
            manager,
        } => commands::auth::register(&ctx, name, email, manager).await,
        Commands::Login { email } => commands::auth::login(&ctx, email).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Venues => commands::venues::run(&ctx).await,
        Commands::Venue { command } => match command {
            VenueCommands::Show { id } => commands::venue::show(&ctx, &id).await,
            VenueCommands::Create { fields } => commands::venue::create(&ctx, fields).await,
            VenueCommands::Edit { id, fields } => commands::venue::edit(&ctx, &id, fields).await,
            VenueCommands::Delete { id, force } => commands::venue::delete(&ctx, &id, force).await,
            VenueCommands::Bookings { id } => commands::venue_bookings::run(&ctx, &id).await,
        },
        Commands::Book {
            venue_id,
            from,
            to,
            guests,
        } => commands::book::run(&ctx, &venue_id, &from, to.as_deref(), guests).await,
        Commands::Bookings => commands::bookings::run(&ctx).await,
        Commands::Profile => commands::profile::show(&ctx).await,
        Commands::Avatar { url } => commands::profile::avatar(&ctx, &url).await,
    }
}
