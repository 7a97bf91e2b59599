use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use inbox_email_contracts::{Email, EmailService};
use inbox_utils::http::{url_with_segments, HttpClient};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/";

/// Email service using the SendGrid v3 web API.
#[derive(Debug, Clone)]
pub struct SendgridEmailServiceImpl {
    config: Arc<SendgridEmailServiceConfig>,
    client: HttpClient,
}

pub struct SendgridEmailServiceConfig {
    api_key: String,
    endpoint: Url,
}

impl SendgridEmailServiceConfig {
    pub fn new(api_key: String, endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => SENDGRID_ENDPOINT.parse()?,
        };
        Ok(Self { api_key, endpoint })
    }
}

impl std::fmt::Debug for SendgridEmailServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendgridEmailServiceConfig")
            .field("api_key", &"[redacted]")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl SendgridEmailServiceImpl {
    pub fn new(config: SendgridEmailServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config: config.into(),
            client: HttpClient::new().context("Failed to build http client")?,
        })
    }

    fn url(&self, segments: &[&str]) -> anyhow::Result<Url> {
        url_with_segments(&self.config.endpoint, segments.iter().copied())
            .ok_or_else(|| anyhow!("Invalid SendGrid endpoint: {}", self.config.endpoint))
    }
}

impl EmailService for SendgridEmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let request = MailSendRequest {
            personalizations: [Personalization {
                to: [Address {
                    email: email.recipient.as_str(),
                }],
            }],
            from: Address {
                email: email.sender.as_str(),
            },
            reply_to: email.reply_to.as_ref().map(|reply_to| Address {
                email: reply_to.as_str(),
            }),
            subject: &email.subject,
            content: [Content {
                kind: "text/plain",
                value: &email.body,
            }],
        };

        let response = self
            .client
            .post(self.url(&["v3", "mail", "send"])?)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "email accepted by sendgrid");
            return Ok(true);
        }

        let detail = response
            .json::<ErrorResponse>()
            .await
            .map(|response| {
                response
                    .errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default();
        bail!("SendGrid rejected the email with status {status}: {detail}")
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.client
            .get(self.url(&["v3", "scopes"])?)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    errors: Vec<ErrorMessage>,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}
