use inbox_config::Config;
use inbox_email_contracts::EmailService;
use inbox_persistence_contracts::Database;
use tracing::info;

use crate::{
    database, email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to supabase");
    let database = database::connect(&config.store)?;
    database.ping().await?;

    info!("Connecting to email service");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let provider = Provider::new(ConfigProvider::new(&config), database, email);
    let server = provider.rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
