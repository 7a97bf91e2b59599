use std::{
    net::{IpAddr, Ipv4Addr},
    sync::Arc,
};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

pub mod sendgrid;
pub mod supabase;

/// A testing server running in the background on a random local port.
#[derive(Debug)]
pub struct RunningServer<S> {
    /// Base url of the server, always with a trailing slash.
    pub url: Url,
    pub state: Arc<S>,
}

async fn bind(host: IpAddr, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))
}

async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

async fn spawn<S>(router: Router, state: Arc<S>) -> anyhow::Result<RunningServer<S>> {
    let listener = bind(Ipv4Addr::LOCALHOST.into(), 0).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(serve(listener, router));

    Ok(RunningServer {
        url: format!("http://{addr}/").parse()?,
        state,
    })
}
