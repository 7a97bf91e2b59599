use inbox_models::contact::ContactSubmission;
use inbox_persistence_contracts::contact::ContactSubmissionRepository;
use tracing::trace;

use crate::{check_response, SupabaseDatabase};

impl ContactSubmissionRepository for SupabaseDatabase {
    async fn create(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        trace!(table = %self.config.contact_table, "insert contact submission");

        let response = self
            .authorize(
                self.client
                    .post(self.rest_url(&self.config.contact_table)?),
            )
            .header("Prefer", "return=minimal")
            .json(&[submission])
            .send()
            .await?;
        check_response(response).await
    }
}
