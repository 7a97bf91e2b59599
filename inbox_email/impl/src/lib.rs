use inbox_email_contracts::{Email, EmailService};
use sendgrid::SendgridEmailServiceImpl;
use smtp::SmtpEmailServiceImpl;

pub mod sendgrid;
pub mod smtp;

/// Email service backed by the transport selected in the configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Sendgrid(SendgridEmailServiceImpl),
    Smtp(SmtpEmailServiceImpl),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        match self {
            Self::Sendgrid(sendgrid) => sendgrid.send(email).await,
            Self::Smtp(smtp) => smtp.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Sendgrid(sendgrid) => sendgrid.ping().await,
            Self::Smtp(smtp) => smtp.ping().await,
        }
    }
}

impl From<SendgridEmailServiceImpl> for EmailServiceImpl {
    fn from(value: SendgridEmailServiceImpl) -> Self {
        Self::Sendgrid(value)
    }
}

impl From<SmtpEmailServiceImpl> for EmailServiceImpl {
    fn from(value: SmtpEmailServiceImpl) -> Self {
        Self::Smtp(value)
    }
}
