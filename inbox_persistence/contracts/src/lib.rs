use std::future::Future;

pub mod contact;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Database: Send + Sync + 'static {
    /// Verify the connection to the database.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockDatabase {
    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("database unreachable"))
            }))
        });
        self
    }
}
