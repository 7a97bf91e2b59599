use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use inbox_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, SubmissionOutcome, SubmissionReport,
};
use inbox_email_contracts::{Email, EmailService};
use inbox_models::{
    contact::ContactSubmission, email_address::EmailAddress,
    notification::NotificationPosition,
};
use inbox_persistence_contracts::contact::ContactSubmissionRepository;
use tracing::{error, info};

pub mod form;
mod notification;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Store, EmailS> {
    store: Store,
    email: EmailS,
    config: Arc<ContactFeatureConfig>,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Address that receives a notification email for every submission.
    pub recipient: EmailAddress,
    pub sender: EmailAddress,
    pub subject: String,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    pub duration: Duration,
    pub closable: bool,
    pub position: NotificationPosition,
}

impl<Store, EmailS> ContactFeatureServiceImpl<Store, EmailS> {
    pub fn new(store: Store, email: EmailS, config: impl Into<Arc<ContactFeatureConfig>>) -> Self {
        Self {
            store,
            email,
            config: config.into(),
        }
    }
}

impl<Store, EmailS> ContactFeatureServiceImpl<Store, EmailS>
where
    Store: ContactSubmissionRepository,
    EmailS: EmailService,
{
    async fn store_and_forward(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactSubmitError> {
        self.store
            .create(submission)
            .await
            .map_err(ContactSubmitError::Store)?;

        let email = make_email(&self.config, submission);
        match self.email.send(email).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ContactSubmitError::Email(anyhow!(
                "The email service did not accept the email"
            ))),
            Err(err) => Err(ContactSubmitError::Email(err)),
        }
    }
}

impl<Store, EmailS> ContactFeatureService for ContactFeatureServiceImpl<Store, EmailS>
where
    Store: ContactSubmissionRepository,
    EmailS: EmailService,
{
    async fn submit(&self, submission: ContactSubmission) -> SubmissionReport {
        let outcome = match self.store_and_forward(&submission).await {
            Ok(()) => {
                info!("Stored and forwarded contact submission");
                SubmissionOutcome::Success
            }
            Err(err) => {
                match &err {
                    ContactSubmitError::Store(source) => {
                        error!("Failed to store contact submission: {source:#}")
                    }
                    ContactSubmitError::Email(source) => error!(
                        "Contact submission has been stored, but the email could not be sent: \
                         {source:#}"
                    ),
                }
                SubmissionOutcome::from(&err)
            }
        };

        SubmissionReport {
            outcome,
            notification: notification::build(outcome, &self.config.notification),
        }
    }
}

fn make_email(config: &ContactFeatureConfig, submission: &ContactSubmission) -> Email {
    Email {
        recipient: config.recipient.clone(),
        sender: config.sender.clone(),
        subject: config.subject.clone(),
        body: format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            submission.name, submission.email, submission.message
        ),
        reply_to: submission.email.parse().ok(),
    }
}
