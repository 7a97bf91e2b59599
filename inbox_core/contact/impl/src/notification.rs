use inbox_core_contact_contracts::SubmissionOutcome;
use inbox_models::notification::{Notification, NotificationStatus};

use crate::NotificationConfig;

pub const SUCCESS_TITLE: &str = "Message sent.";
pub const SUCCESS_DESCRIPTION: &str =
    "We've received your message and will get back to you soon.";
pub const ERROR_TITLE: &str = "Error.";
pub const STORE_FAILED_DESCRIPTION: &str = "There was an error sending your message.";
pub const EMAIL_FAILED_DESCRIPTION: &str = "There was an error sending your email.";

pub fn build(outcome: SubmissionOutcome, config: &NotificationConfig) -> Notification {
    let (title, description, status) = match outcome {
        SubmissionOutcome::Success => (
            SUCCESS_TITLE,
            SUCCESS_DESCRIPTION,
            NotificationStatus::Success,
        ),
        SubmissionOutcome::StoreFailed => (
            ERROR_TITLE,
            STORE_FAILED_DESCRIPTION,
            NotificationStatus::Error,
        ),
        SubmissionOutcome::EmailFailed => (
            ERROR_TITLE,
            EMAIL_FAILED_DESCRIPTION,
            NotificationStatus::Error,
        ),
    };

    Notification {
        title: title.into(),
        description: description.into(),
        status,
        duration: config.duration,
        closable: config.closable,
        position: config.position,
    }
}
