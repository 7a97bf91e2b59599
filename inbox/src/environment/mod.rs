use std::sync::Arc;

use inbox_api_rest::RestServerConfig;
use inbox_config::Config;
use inbox_core_contact_impl::{ContactFeatureConfig, NotificationConfig};
use inbox_core_health_impl::HealthFeatureConfig;
use types::{ContactFeature, Database, Email, HealthFeature, RestServer};

use crate::{database, email};

pub mod types;

/// Wires the services of the application together.
#[derive(Debug, Clone)]
pub struct Provider {
    database: Database,
    email: Email,
    config: ConfigProvider,
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database, email: Email) -> Self {
        Self {
            database,
            email,
            config,
        }
    }

    /// Set up the remote collaborators without contacting them.
    pub fn connect(config: &Config) -> anyhow::Result<Self> {
        let database = database::connect(&config.store)?;
        let email = email::connect(&config.email)?;
        Ok(Self::new(ConfigProvider::new(config), database, email))
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(
            self.config.rest_server_config,
            self.health_feature(),
            self.contact_feature(),
        )
    }

    pub fn contact_feature(&self) -> ContactFeature {
        ContactFeature::new(
            self.database.clone(),
            self.email.clone(),
            Arc::clone(&self.config.contact_feature_config),
        )
    }

    pub fn health_feature(&self) -> HealthFeature {
        HealthFeature::new(
            self.database.clone(),
            self.email.clone(),
            self.config.health_feature_config.clone(),
        )
    }
}

/// Services that only depend on the configuration
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    rest_server_config: RestServerConfig,
    contact_feature_config: Arc<ContactFeatureConfig>,
    health_feature_config: HealthFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone(),
            sender: config.email.from.clone(),
            subject: config.contact.subject.clone(),
            notification: NotificationConfig {
                duration: config.notification.duration.into(),
                closable: config.notification.closable,
                position: config.notification.position,
            },
        }
        .into();

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            rest_server_config,
            contact_feature_config,
            health_feature_config,
        }
    }
}
