use anyhow::Result;
use dialoguer::Input;
use holidaze_core::api::{LoginRequest, REGISTRATION_EMAIL_DOMAIN, RegisterRequest};
use holidaze_core::manager_requests::ManagerRequests;
use holidaze_core::session::Session;
use owo_colors::OwoColorize;

use crate::context::Context;

pub async fn register(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
    manager: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("  Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::<String>::new()
            .with_prompt(format!("  Email ({REGISTRATION_EMAIL_DOMAIN})"))
            .interact_text()?,
    };

    let password = rpassword::prompt_password("  Password: ")?;

    let request = RegisterRequest {
        name,
        email,
        password,
        venue_manager: manager,
    };

    let profile = ctx.load("Creating account", ctx.api.register(&request)).await??;

    let mut requests = ManagerRequests::load()?;
    if requests.record_registration(manager, &profile) {
        requests.save()?;
    }

    println!("{}", "Account created successfully! You can now log in.".green());
    if manager && !profile.venue_manager {
        println!("{}", "Venue manager access is pending.".yellow());
    }

    Ok(())
}

pub async fn login(ctx: &Context, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("  Email").interact_text()?,
    };

    let password = rpassword::prompt_password("  Password: ")?;

    let request = LoginRequest { email, password };
    let login = match ctx.load("Logging in", ctx.api.login(&request)).await? {
        Ok(login) => login,
        Err(e) if e.status().is_some_and(|s| s == 400 || s == 401) => {
            anyhow::bail!("Invalid credentials")
        }
        Err(e) => return Err(e.into()),
    };

    let mut profile = login.profile;
    let mut requests = ManagerRequests::load()?;
    if requests.apply(&mut profile) {
        requests.save()?;
    }

    let session = Session::new(login.access_token, profile);
    session.save()?;

    println!("Logged in as {}", session.user.name.bold());

    if ctx.config.api_key.is_none() {
        println!(
            "{}",
            "No API key configured: set api_key in ~/.config/holidaze/config.toml to book and manage venues."
                .yellow()
        );
    }

    Ok(())
}

/// Clear the saved session without requiring it to parse.
pub fn logout() -> Result<()> {
    let user = Session::load().ok().flatten().map(|s| s.user);
    Session::clear()?;

    match user {
        Some(user) => println!("Logged out {}", user.name.bold()),
        None => println!("{}", "Not logged in".dimmed()),
    }

    Ok(())
}
