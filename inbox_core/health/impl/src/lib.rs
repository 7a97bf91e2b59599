use std::{sync::Arc, time::Duration};

use inbox_core_health_contracts::{HealthFeatureService, HealthStatus};
use inbox_email_contracts::EmailService;
use inbox_persistence_contracts::Database;
use tokio::{sync::RwLock, time::Instant};
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Db, Email> {
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Db, Email> HealthFeatureServiceImpl<Db, Email> {
    pub fn new(db: Db, email: Email, config: HealthFeatureConfig) -> Self {
        Self {
            db,
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Db, Email>
where
    Db: Database,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = Instant::now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let store = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping store: {err}"))
            .is_ok();

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping email service: {err}"))
            .is_ok();

        let status = HealthStatus { store, email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use inbox_email_contracts::MockEmailService;
    use inbox_persistence_contracts::MockDatabase;

    use super::*;

    const CONFIG: HealthFeatureConfig = HealthFeatureConfig {
        cache_ttl: Duration::from_secs(10),
    };

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let db = MockDatabase::new().with_ping(true);
        let email = MockEmailService::new().with_ping(true);
        let sut = HealthFeatureServiceImpl::new(db, email, CONFIG);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                store: true,
                email: true
            }
        );
        assert!(result.is_healthy());
    }

    #[tokio::test]
    async fn store_down() {
        // Arrange
        let db = MockDatabase::new().with_ping(false);
        let email = MockEmailService::new().with_ping(true);
        let sut = HealthFeatureServiceImpl::new(db, email, CONFIG);

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                store: false,
                email: true
            }
        );
        assert!(!result.is_healthy());
    }

    #[tokio::test(start_paused = true)]
    async fn cached() {
        // Arrange
        let db = MockDatabase::new().with_ping(true);
        let email = MockEmailService::new().with_ping(false);
        let sut = HealthFeatureServiceImpl::new(db, email, CONFIG);

        // Act
        let first = sut.get_status().await;
        tokio::time::advance(Duration::from_secs(9)).await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
        assert!(!second.email);
    }

    #[tokio::test(start_paused = true)]
    async fn cache_expires() {
        // Arrange
        let mut db = MockDatabase::new();
        db.expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));
        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));
        let sut = HealthFeatureServiceImpl::new(db, email, CONFIG);

        // Act
        sut.get_status().await;
        tokio::time::advance(Duration::from_secs(11)).await;
        let result = sut.get_status().await;

        // Assert
        assert!(result.is_healthy());
    }
}
