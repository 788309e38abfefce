use chrono::FixedOffset;
use medspace_core_lead_contracts::{LeadService, LeadSubmitError};
use medspace_extern_contracts::{
    credentials::{LoadCredentialsError, SheetsCredentialsProvider},
    sheets::SheetsApiService,
};
use medspace_models::{
    lead::LeadSubmission,
    sheet::{SheetRange, SheetRow},
};
use medspace_shared_contracts::time::TimeService;
use tracing::{debug, error};

/// Regional rendering used by the sheet, e.g. `07/08/2026, 03:45:12 pm`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %I:%M:%S %P";

#[derive(Debug, Clone)]
pub struct LeadServiceImpl<Time, SheetsApi, Credentials> {
    time: Time,
    sheets_api: SheetsApi,
    credentials: Credentials,
    config: LeadServiceConfig,
}

#[derive(Debug, Clone)]
pub struct LeadServiceConfig {
    pub utc_offset: FixedOffset,
}

impl<Time, SheetsApi, Credentials> LeadServiceImpl<Time, SheetsApi, Credentials> {
    pub fn new(
        time: Time,
        sheets_api: SheetsApi,
        credentials: Credentials,
        config: LeadServiceConfig,
    ) -> Self {
        Self {
            time,
            sheets_api,
            credentials,
            config,
        }
    }
}

impl<Time, SheetsApi, Credentials> LeadService for LeadServiceImpl<Time, SheetsApi, Credentials>
where
    Time: TimeService,
    SheetsApi: SheetsApiService,
    Credentials: SheetsCredentialsProvider,
{
    async fn submit(&self, submission: LeadSubmission) -> Result<(), LeadSubmitError> {
        // credentials are re-read on every request
        let credentials = self.credentials.load().map_err(|err| match err {
            LoadCredentialsError::Incomplete(missing) => {
                error!("Spreadsheet credentials are not configured, missing: {missing:?}");
                LeadSubmitError::NotConfigured
            }
            LoadCredentialsError::Other(err) => err.into(),
        })?;

        let timestamp = self
            .time
            .now()
            .with_timezone(&self.config.utc_offset)
            .format(TIMESTAMP_FORMAT)
            .to_string();

        let range = SheetRange::for_form_type(submission.form_type);
        let row = SheetRow {
            timestamp,
            name: submission.name.into_inner(),
            email: submission.email.into_inner(),
            message: submission
                .message
                .map(|message| message.into_inner())
                .unwrap_or_default(),
        };

        debug!(tab = range.tab(), "Appending lead submission");
        self.sheets_api
            .append_row(&credentials, range, row)
            .await
            .map_err(LeadSubmitError::Append)
    }
}
