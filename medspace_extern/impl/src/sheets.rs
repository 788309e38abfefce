use std::{sync::Arc, time::Duration};

use anyhow::Context;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use medspace_extern_contracts::{credentials::SheetsCredentials, sheets::SheetsApiService};
use medspace_models::sheet::{SheetRange, SheetRow};
use medspace_shared_contracts::time::TimeService;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const API_BASE: &str = "https://sheets.googleapis.com/";
const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub struct SheetsApiServiceImpl<Time> {
    time: Time,
    config: SheetsApiServiceConfig,
    client: HttpClient,
}

impl<Time> SheetsApiServiceImpl<Time> {
    pub fn new(time: Time, config: SheetsApiServiceConfig) -> Self {
        Self {
            time,
            config,
            client: HttpClient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetsApiServiceConfig {
    token_endpoint: Arc<Url>,
    api_base: Arc<Url>,
}

impl SheetsApiServiceConfig {
    pub fn new(token_endpoint_override: Option<Url>, api_base_override: Option<Url>) -> Self {
        Self {
            token_endpoint: token_endpoint_override
                .unwrap_or_else(|| TOKEN_ENDPOINT.parse().unwrap())
                .into(),
            api_base: api_base_override
                .unwrap_or_else(|| API_BASE.parse().unwrap())
                .into(),
        }
    }
}

impl<Time> SheetsApiService for SheetsApiServiceImpl<Time>
where
    Time: TimeService,
{
    async fn append_row(
        &self,
        credentials: &SheetsCredentials,
        range: SheetRange,
        row: SheetRow,
    ) -> anyhow::Result<()> {
        let access_token = self.fetch_access_token(credentials).await?;

        let url = self
            .config
            .api_base
            .join(&format!(
                "v4/spreadsheets/{}/values/{range}:append",
                credentials.spreadsheet_id
            ))
            .context("Failed to build append url")?;

        self.client
            .post(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(access_token)
            .json(&AppendRequest {
                values: [row.into_values()],
            })
            .send()
            .await
            .context("Failed to send append request")?
            .error_for_status()
            .context("Append request returned an error")?;

        Ok(())
    }
}

impl<Time> SheetsApiServiceImpl<Time>
where
    Time: TimeService,
{
    /// Exchanges a signed service account assertion for a short-lived access
    /// token. Tokens are intentionally not cached; every append
    /// authenticates from scratch.
    async fn fetch_access_token(&self, credentials: &SheetsCredentials) -> anyhow::Result<String> {
        let assertion = self.sign_assertion(credentials)?;

        self.client
            .post((*self.config.token_endpoint).clone())
            .form(&TokenRequest {
                grant_type: JWT_BEARER_GRANT_TYPE,
                assertion: &assertion,
            })
            .send()
            .await
            .context("Failed to send token request")?
            .error_for_status()
            .context("Token request returned an error")?
            .json::<TokenResponse>()
            .await
            .context("Failed to deserialize token response")
            .map(|response| response.access_token)
    }

    fn sign_assertion(&self, credentials: &SheetsCredentials) -> anyhow::Result<String> {
        let iat = self.time.now().timestamp() as u64;
        let claims = AssertionClaims {
            iss: &credentials.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: self.config.token_endpoint.as_str(),
            iat,
            exp: iat + ASSERTION_TTL.as_secs(),
        };

        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .context("Failed to load service account private key")?;
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .context("Failed to sign service account assertion")
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    assertion: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct AppendRequest {
    values: [[String; 4]; 1],
}
