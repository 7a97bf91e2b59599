use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use inbox_models::{email_address::EmailAddress, notification::NotificationPosition};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a list of config files separated like `PATH`.
/// Later files override earlier ones.
pub const CONFIG_PATH_ENV: &str = "INBOX_CONFIG_PATH";

/// Load the config files listed in [`CONFIG_PATH_ENV`], or the default config
/// if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Load the given config files and apply each of `overrides` (a TOML
/// snippet like `store.table = "x"`) on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub store: StoreConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub notification: NotificationConfig,
    pub health: HealthConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Url of the supabase project
    pub url: Url,
    pub secret: String,
    pub table: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub transport: EmailTransport,
    pub from: EmailAddress,
    pub sendgrid: Option<SendgridConfig>,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    Sendgrid,
    Smtp,
}

#[derive(Debug, Deserialize)]
pub struct SendgridConfig {
    pub api_key: String,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
    pub subject: String,
}

#[derive(Debug, Deserialize)]
pub struct NotificationConfig {
    pub duration: Duration,
    pub closable: bool,
    pub position: NotificationPosition,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[DEFAULT_CONFIG_PATH]).unwrap();

        assert_eq!(config.store.table, "contact-form");
        assert_eq!(config.email.transport, EmailTransport::Sendgrid);
        assert!(config.email.sendgrid.is_some());
        assert_eq!(config.contact.recipient.as_str(), "recipient@example.com");
        assert_eq!(config.contact.subject, "New Contact Form Submission");
        assert_eq!(*config.notification.duration, std::time::Duration::from_secs(5));
        assert!(config.notification.closable);
        assert_eq!(config.notification.position, NotificationPosition::TopRight);
        assert!(config.sentry.is_none());
    }

    #[test]
    fn load_with_overrides() {
        let config = load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &[
                "email.transport = \"smtp\"",
                "email.smtp.url = \"smtp://127.0.0.1:2525\"",
                "notification.position = \"bottom-left\"",
            ],
        )
        .unwrap();

        assert_eq!(config.email.transport, EmailTransport::Smtp);
        assert_eq!(config.email.smtp.unwrap().url, "smtp://127.0.0.1:2525");
        assert_eq!(config.notification.position, NotificationPosition::BottomLeft);
    }

    #[test]
    fn invalid_recipient() {
        let result = load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &["contact.recipient = \"not an email\""],
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file() {
        let result = load_paths(&["/nonexistent/inbox.toml"]);
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("/nonexistent/inbox.toml"), "{err}");
    }
}
