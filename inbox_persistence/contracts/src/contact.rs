use std::future::Future;

use inbox_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionRepository: Send + Sync + 'static {
    /// Insert a new contact submission as a single record.
    ///
    /// There is no idempotency key: inserting the same submission twice
    /// creates two records.
    fn create(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSubmissionRepository {
    pub fn with_create(mut self, submission: ContactSubmission) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_create_error(mut self, submission: ContactSubmission, error: &'static str) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
