use medspace_core_health_impl::HealthServiceImpl;
use medspace_core_lead_impl::LeadServiceImpl;
use medspace_extern_impl::{
    credentials::EnvSheetsCredentialsProvider, sheets::SheetsApiServiceImpl,
};
use medspace_shared_impl::time::TimeServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Extern
pub type SheetsApi = SheetsApiServiceImpl<Time>;
pub type Credentials = EnvSheetsCredentialsProvider;

// Core
pub type Health = HealthServiceImpl<Credentials>;
pub type Lead = LeadServiceImpl<Time, SheetsApi, Credentials>;

// API
pub type RestServer = medspace_api_rest::RestServer<Health, Lead>;
