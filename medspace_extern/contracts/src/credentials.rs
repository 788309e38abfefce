use medspace_models::Sensitive;
use thiserror::Error;

/// Service account credentials for the spreadsheet service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsCredentials {
    pub client_email: String,
    pub private_key: Sensitive<String>,
    pub spreadsheet_id: String,
}

/// Reads the spreadsheet credentials from process configuration.
///
/// `load` is invoked on every request; implementations must not cache
/// results across requests.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SheetsCredentialsProvider: Send + Sync + 'static {
    fn load(&self) -> Result<SheetsCredentials, LoadCredentialsError>;
}

#[derive(Debug, Error)]
pub enum LoadCredentialsError {
    #[error("Missing configuration values: {0:?}")]
    Incomplete(Vec<String>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockSheetsCredentialsProvider {
    pub fn with_load(mut self, credentials: SheetsCredentials) -> Self {
        self.expect_load().once().return_once(move || Ok(credentials));
        self
    }

    pub fn with_load_incomplete(mut self, missing: Vec<String>) -> Self {
        self.expect_load()
            .once()
            .return_once(move || Err(LoadCredentialsError::Incomplete(missing)));
        self
    }
}
