use medspace_config::Config;
use medspace_core_health_impl::HealthServiceImpl;
use medspace_core_lead_impl::{LeadServiceConfig, LeadServiceImpl};
use medspace_extern_impl::{
    credentials::{EnvSheetsCredentialsProvider, EnvSheetsCredentialsProviderConfig},
    sheets::{SheetsApiServiceConfig, SheetsApiServiceImpl},
};
use medspace_shared_impl::time::TimeServiceImpl;
use types::RestServer;

pub mod types;

pub fn build_rest_server(config: &Config) -> RestServer {
    let time = TimeServiceImpl;

    let credentials = EnvSheetsCredentialsProvider::new(
        config
            .sheets
            .env_prefix
            .clone()
            .map(|env_prefix| EnvSheetsCredentialsProviderConfig { env_prefix })
            .unwrap_or_default(),
    );

    let sheets_api = SheetsApiServiceImpl::new(
        time,
        SheetsApiServiceConfig::new(
            config.sheets.token_endpoint_override.clone(),
            config.sheets.api_base_override.clone(),
        ),
    );

    let lead = LeadServiceImpl::new(
        time,
        sheets_api,
        credentials.clone(),
        LeadServiceConfig {
            utc_offset: config.lead.utc_offset.into(),
        },
    );

    let health = HealthServiceImpl::new(credentials);

    RestServer::new(health, lead)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn build_from_default_config() {
        let config =
            medspace_config::load(&[Path::new(medspace_config::DEFAULT_CONFIG_PATH)]).unwrap();
        let _: RestServer = build_rest_server(&config);
    }
}
