use medspace_core_health_contracts::{HealthService, HealthStatus};
use medspace_extern_contracts::credentials::SheetsCredentialsProvider;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Credentials> {
    credentials: Credentials,
}

impl<Credentials> HealthServiceImpl<Credentials> {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl<Credentials> HealthService for HealthServiceImpl<Credentials>
where
    Credentials: SheetsCredentialsProvider,
{
    async fn get_status(&self) -> HealthStatus {
        let sheets_credentials = self
            .credentials
            .load()
            .inspect_err(|err| debug!("Spreadsheet credentials unavailable: {err}"))
            .is_ok();

        HealthStatus { sheets_credentials }
    }
}
