use anyhow::Context;
use inbox_config::{EmailConfig, EmailTransport};
use inbox_email_impl::{
    sendgrid::{SendgridEmailServiceConfig, SendgridEmailServiceImpl},
    smtp::SmtpEmailServiceImpl,
    EmailServiceImpl,
};

/// Set up the email transport selected in the config
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    match config.transport {
        EmailTransport::Sendgrid => {
            let sendgrid = config
                .sendgrid
                .as_ref()
                .context("Email transport is sendgrid, but [email.sendgrid] is missing")?;
            let config = SendgridEmailServiceConfig::new(
                sendgrid.api_key.clone(),
                sendgrid.endpoint_override.clone(),
            )?;
            SendgridEmailServiceImpl::new(config)
                .map(Into::into)
                .context("Failed to set up sendgrid client")
        }
        EmailTransport::Smtp => {
            let smtp = config
                .smtp
                .as_ref()
                .context("Email transport is smtp, but [email.smtp] is missing")?;
            SmtpEmailServiceImpl::new(&smtp.url)
                .map(Into::into)
                .context("Failed to connect to SMTP server")
        }
    }
}
