//! Per-invocation context: config, the saved session and an API client
//! built from both.

use std::future::Future;

use anyhow::Result;
use holidaze_core::api::Api;
use holidaze_core::config::HolidazeConfig;
use holidaze_core::model::{Profile, Venue};
use holidaze_core::ownership::{VenueLookup, can_manage};
use holidaze_core::session::Session;
use holidaze_core::view::ViewGuard;

use crate::utils::tui;

pub struct Context {
    pub config: HolidazeConfig,
    pub session: Option<Session>,
    pub api: Api,
    pub view: ViewGuard,
}

impl Context {
    pub fn init() -> Result<Self> {
        let config = HolidazeConfig::load()?;
        let session = Session::load()?;
        let api = Api::new(&config, session.as_ref())?;

        tracing::debug!(
            api_url = %config.api_url,
            logged_in = session.is_some(),
            "context loaded"
        );

        Ok(Context {
            config,
            session,
            api,
            view: ViewGuard::new(),
        })
    }

    pub fn user(&self) -> Option<&Profile> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn require_user(&self) -> Result<&Profile> {
        self.user().ok_or_else(|| {
            anyhow::anyhow!(
                "You must be logged in to do that.\n\n\
                Log in with:\n  \
                holidaze login"
            )
        })
    }

    /// Await `fut` behind a spinner. Ctrl-C tears the view down, and a torn
    /// down view yields "Cancelled" instead of the result.
    ///
    /// The signal handler is only installed once a load starts, so Ctrl-C at
    /// an earlier password prompt still ends the process.
    pub async fn load<F: Future>(&self, message: &str, fut: F) -> Result<F::Output> {
        let spinner = tui::create_spinner(message);
        let output = tokio::select! {
            output = self.view.load(fut) => output,
            Ok(()) = tokio::signal::ctrl_c() => {
                self.view.teardown();
                None
            }
        };
        spinner.finish_and_clear();

        output.ok_or_else(|| anyhow::anyhow!("Cancelled"))
    }

    /// Fetch a venue and bail unless the current user may manage it.
    pub async fn managed_venue(&self, id: &str) -> Result<Venue> {
        let user = self.require_user()?;
        let venue = self.load("Loading venue", self.api.venue(id)).await??;

        self.load("Checking permissions", require_manager(&venue, user, &self.api))
            .await??;

        Ok(venue)
    }
}

/// Bail unless `user` may manage `venue`.
pub async fn require_manager<L: VenueLookup>(venue: &Venue, user: &Profile, lookup: &L) -> Result<()> {
    if !can_manage(venue, Some(user), lookup).await {
        anyhow::bail!("You cannot manage this venue.");
    }
    Ok(())
}
