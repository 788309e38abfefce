use std::future::Future;

use medspace_models::sheet::{SheetRange, SheetRow};

use crate::credentials::SheetsCredentials;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SheetsApiService: Send + Sync + 'static {
    /// Appends a single row to the given range of the spreadsheet the
    /// credentials are scoped to.
    fn append_row(
        &self,
        credentials: &SheetsCredentials,
        range: SheetRange,
        row: SheetRow,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockSheetsApiService {
    pub fn with_append_row(
        mut self,
        credentials: SheetsCredentials,
        range: SheetRange,
        row: SheetRow,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_append_row()
            .once()
            .with(
                mockall::predicate::eq(credentials),
                mockall::predicate::eq(range),
                mockall::predicate::eq(row),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
