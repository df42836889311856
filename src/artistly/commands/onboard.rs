//! Artist onboarding: validate the form, then hand it to an [`Intake`] after a
//! simulated network delay.
//!
//! The delay runs as one tokio timer raced against a cancellation token. Each
//! submission settles exactly once: an outcome from the intake, or
//! [`ArtistlyError::Cancelled`]. There is no retry.

use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::{ArtistlyError, Result};
use crate::validation::{ArtistApplication, ValidApplication, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Registration Successful! Your artist profile has been created. We'll review it and get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Registration Failed: There was an error creating your profile. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success {
        application_id: Uuid,
        received: DateTime<Utc>,
    },
    Failed {
        reason: String,
    },
}

/// Receives validated applications once the submission delay has elapsed.
pub trait Intake {
    fn receive(&self, application: &ValidApplication) -> SubmissionOutcome;
}

/// Accepts every application and assigns it a fresh id. Nothing is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedIntake;

impl Intake for SimulatedIntake {
    fn receive(&self, _application: &ValidApplication) -> SubmissionOutcome {
        SubmissionOutcome::Success {
            application_id: Uuid::new_v4(),
            received: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OnboardPage {
    pub verdict: Verdict,
    pub application: Option<ValidApplication>,
    pub outcome: Option<SubmissionOutcome>,
}

pub async fn submit<I: Intake>(
    intake: &I,
    application: &ValidApplication,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<SubmissionOutcome> {
    tracing::info!(
        name = %application.name,
        delay_ms = delay.as_millis() as u64,
        "submitting application"
    );

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::warn!(name = %application.name, "submission cancelled");
            Err(ArtistlyError::Cancelled)
        }
        _ = tokio::time::sleep(delay) => {
            let outcome = intake.receive(application);
            match &outcome {
                SubmissionOutcome::Success { application_id, .. } => {
                    tracing::info!(%application_id, "application received");
                }
                SubmissionOutcome::Failed { reason } => {
                    tracing::warn!(%reason, "application rejected by intake");
                }
            }
            Ok(outcome)
        }
    }
}

/// Validates and, when the form passes, submits it.
///
/// A failing form or a failed submission is reported through error messages
/// on the result, not as `Err`; only cancellation and infrastructure problems
/// propagate.
pub async fn run<I: Intake>(
    form: &ArtistApplication,
    intake: &I,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let application = match form.validate() {
        Ok(application) => application,
        Err(ArtistlyError::Validation(verdict)) => {
            for error in &verdict.errors {
                result.add_message(CmdMessage::error(format!(
                    "{}: {}",
                    error.field.as_str(),
                    error.message
                )));
            }
            return Ok(result.with_page(Page::Onboard(OnboardPage {
                verdict,
                application: None,
                outcome: None,
            })));
        }
        Err(e) => return Err(e),
    };

    let outcome = submit(intake, &application, delay, cancel).await?;
    match &outcome {
        SubmissionOutcome::Success { application_id, .. } => {
            result.add_message(CmdMessage::success(SUCCESS_MESSAGE));
            result.add_message(CmdMessage::info(format!(
                "Application id: {}",
                application_id
            )));
        }
        SubmissionOutcome::Failed { reason } => {
            result.add_message(CmdMessage::error(FAILURE_MESSAGE));
            result.add_message(CmdMessage::info(reason.clone()));
        }
    }

    Ok(result.with_page(Page::Onboard(OnboardPage {
        verdict: Verdict::default(),
        application: Some(application),
        outcome: Some(outcome),
    })))
}
