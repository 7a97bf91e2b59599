use std::future::Future;

use inbox_models::{contact::ContactSubmission, notification::Notification};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Run one submission cycle for the given snapshot of the contact form.
    ///
    /// The submission is first inserted into the store. Only if that succeeds,
    /// a notification email is sent to the configured recipient. Failures of
    /// either step are logged and reported through the returned
    /// notification; they never propagate further.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = SubmissionReport> + Send;
}

/// Terminal state of a submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The submission has been stored and the email has been sent.
    Success,
    /// The submission could not be stored, no email has been sent.
    StoreFailed,
    /// The submission has been stored, but the email could not be sent.
    EmailFailed,
}

impl SubmissionOutcome {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub outcome: SubmissionOutcome,
    pub notification: Notification,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to store contact submission.")]
    Store(#[source] anyhow::Error),
    #[error("Failed to send notification email.")]
    Email(#[source] anyhow::Error),
}

impl From<&ContactSubmitError> for SubmissionOutcome {
    fn from(value: &ContactSubmitError) -> Self {
        match value {
            ContactSubmitError::Store(_) => Self::StoreFailed,
            ContactSubmitError::Email(_) => Self::EmailFailed,
        }
    }
}

/// Returned when a contact form is submitted while a previous submission of
/// the same form is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The contact form is already being submitted.")]
pub struct ContactFormBusyError;

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(mut self, submission: ContactSubmission, report: SubmissionReport) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(report)));
        self
    }
}
