use anyhow::anyhow;
use inbox_email_contracts::{Email, EmailService};
use inbox_utils::Apply;
use lettre::{
    message::{header, Mailbox, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct SmtpEmailServiceImpl {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailServiceImpl {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { transport })
    }
}

impl EmailService for SmtpEmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = Message::builder()
            .from(Mailbox::from(email.sender.0))
            .to(Mailbox::from(email.recipient.0))
            .apply_map(
                email.reply_to.map(|x| Mailbox::from(x.0)),
                MessageBuilder::reply_to,
            )
            .subject(email.subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
