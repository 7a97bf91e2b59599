use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use inbox_persistence_contracts::Database;
use inbox_utils::http::{url_with_segments, HttpClient};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

pub mod contact;

/// Database backed by the PostgREST api of a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseDatabase {
    config: Arc<SupabaseDatabaseConfig>,
    client: HttpClient,
}

pub struct SupabaseDatabaseConfig {
    pub url: Url,
    pub secret: String,
    /// Table that contact submissions are inserted into.
    pub contact_table: String,
}

impl std::fmt::Debug for SupabaseDatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseDatabaseConfig")
            .field("url", &self.url.as_str())
            .field("secret", &"[redacted]")
            .field("contact_table", &self.contact_table)
            .finish()
    }
}

impl SupabaseDatabase {
    pub fn connect(config: SupabaseDatabaseConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config: config.into(),
            client: HttpClient::new().context("Failed to build http client")?,
        })
    }

    fn rest_url(&self, table: &str) -> anyhow::Result<Url> {
        url_with_segments(&self.config.url, ["rest", "v1", table])
            .ok_or_else(|| anyhow!("Invalid supabase url: {}", self.config.url))
    }

    /// Attach the api key of the project to the request.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.secret)
            .bearer_auth(&self.config.secret)
    }
}

impl Database for SupabaseDatabase {
    async fn ping(&self) -> anyhow::Result<()> {
        let response = self
            .authorize(self.client.get(self.rest_url("")?))
            .send()
            .await?;
        check_response(response).await
    }
}

/// Error object returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: String,
    details: Option<String>,
    hint: Option<String>,
}

impl std::fmt::Display for PostgrestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code {code})")?;
        }
        if let Some(details) = &self.details {
            write!(f, ", details: {details}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, ", hint: {hint}")?;
        }
        Ok(())
    }
}

async fn check_response(response: Response) -> anyhow::Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    match response.json::<PostgrestError>().await {
        Ok(err) => bail!("Supabase request failed with status {status}: {err}"),
        Err(_) => bail!("Supabase request failed with status {status}"),
    }
}
