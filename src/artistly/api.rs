//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! page and operation, whatever the UI.
//!
//! The facade loads the record store once from its [`RecordSource`], then
//! dispatches to `commands/*.rs`. It returns `Result<CmdResult>` and never
//! prints, exits, or formats.
//!
//! `ArtistlyApi<S: RecordSource>` is generic over where records come from:
//! - CLI: `BundledSource` or `FileSource`
//! - Tests: `InMemorySource`

use crate::commands;
use crate::error::Result;
use crate::filter::FilterState;
use crate::model::BookingAction;
use crate::store::{RecordSource, RecordStore};
use crate::validation::ArtistApplication;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::onboard::{Intake, SimulatedIntake, SubmissionOutcome};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Page};

pub struct ArtistlyApi<S: RecordSource> {
    source: S,
    store: RecordStore,
    config_dir: PathBuf,
}

impl<S: RecordSource> ArtistlyApi<S> {
    /// Loads the records. A source that fails to load fails here, before any
    /// page is built.
    pub fn new(source: S, config_dir: impl Into<PathBuf>) -> Result<Self> {
        let store = source.load()?;
        tracing::debug!(
            source = %source.describe(),
            artists = store.artists().len(),
            bookings = store.bookings().len(),
            "record store ready"
        );
        Ok(Self {
            source,
            store,
            config_dir: config_dir.into(),
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn home(&self) -> Result<CmdResult> {
        commands::home::run()
    }

    pub fn routes(&self) -> Result<CmdResult> {
        commands::routes::run()
    }

    pub fn list_artists(&self, state: &FilterState) -> Result<CmdResult> {
        commands::artists::run(&self.store, state)
    }

    pub fn dashboard(&self, state: &FilterState) -> Result<CmdResult> {
        commands::dashboard::run(&self.store, state)
    }

    pub fn respond(&self, booking_id: &str, action: BookingAction) -> Result<CmdResult> {
        commands::respond::run(&self.store, booking_id, action)
    }

    pub async fn onboard<I: Intake>(
        &self,
        form: &ArtistApplication,
        intake: &I,
        delay: Duration,
        cancel: &CancellationToken,
    ) -> Result<CmdResult> {
        commands::onboard::run(form, intake, delay, cancel).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
