use std::future::Future;

use medspace_models::lead::LeadSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadService: Send + Sync + 'static {
    /// Persists a validated lead submission as one spreadsheet row.
    fn submit(
        &self,
        submission: LeadSubmission,
    ) -> impl Future<Output = Result<(), LeadSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum LeadSubmitError {
    #[error("The spreadsheet credentials are not configured.")]
    NotConfigured,
    #[error("Failed to append the submission to the spreadsheet.")]
    Append(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockLeadService {
    pub fn with_submit(
        mut self,
        submission: LeadSubmission,
        result: Result<(), LeadSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
