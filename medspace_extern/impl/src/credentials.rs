use medspace_extern_contracts::credentials::{
    LoadCredentialsError, SheetsCredentials, SheetsCredentialsProvider,
};
use medspace_models::Sensitive;

pub const DEFAULT_ENV_PREFIX: &str = "GOOGLE_SHEETS";

const CLIENT_EMAIL_VAR: &str = "CLIENT_EMAIL";
const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
const SPREADSHEET_ID_VAR: &str = "SPREADSHEET_ID";

/// Reads service account credentials from the process environment on every
/// call, so credential rotation does not require a restart.
#[derive(Debug, Clone)]
pub struct EnvSheetsCredentialsProvider {
    config: EnvSheetsCredentialsProviderConfig,
}

#[derive(Debug, Clone)]
pub struct EnvSheetsCredentialsProviderConfig {
    pub env_prefix: String,
}

impl Default for EnvSheetsCredentialsProviderConfig {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.into(),
        }
    }
}

impl EnvSheetsCredentialsProvider {
    pub fn new(config: EnvSheetsCredentialsProviderConfig) -> Self {
        Self { config }
    }

    fn read(&self, name: &str, missing: &mut Vec<String>) -> Option<String> {
        let var = format!("{}_{name}", self.config.env_prefix);
        let value = std::env::var(&var).ok().filter(|value| !value.is_empty());
        if value.is_none() {
            missing.push(var);
        }
        value
    }
}

impl SheetsCredentialsProvider for EnvSheetsCredentialsProvider {
    fn load(&self) -> Result<SheetsCredentials, LoadCredentialsError> {
        let mut missing = Vec::new();
        let client_email = self.read(CLIENT_EMAIL_VAR, &mut missing);
        let private_key = self.read(PRIVATE_KEY_VAR, &mut missing);
        let spreadsheet_id = self.read(SPREADSHEET_ID_VAR, &mut missing);

        match (client_email, private_key, spreadsheet_id) {
            (Some(client_email), Some(private_key), Some(spreadsheet_id)) => {
                Ok(SheetsCredentials {
                    client_email,
                    // private keys are stored with escaped newlines
                    private_key: Sensitive(private_key.replace("\\n", "\n")),
                    spreadsheet_id,
                })
            }
            _ => Err(LoadCredentialsError::Incomplete(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use medspace_extern_contracts::credentials::LoadCredentialsError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_sut(prefix: &str) -> EnvSheetsCredentialsProvider {
        EnvSheetsCredentialsProvider::new(EnvSheetsCredentialsProviderConfig {
            env_prefix: prefix.into(),
        })
    }

    #[test]
    fn ok() {
        std::env::set_var("CREDS_OK_CLIENT_EMAIL", "svc@project.iam.example.com");
        std::env::set_var("CREDS_OK_PRIVATE_KEY", "line1\\nline2\\n");
        std::env::set_var("CREDS_OK_SPREADSHEET_ID", "sheet-123");

        let result = make_sut("CREDS_OK").load().unwrap();

        assert_eq!(
            result,
            SheetsCredentials {
                client_email: "svc@project.iam.example.com".into(),
                private_key: Sensitive("line1\nline2\n".into()),
                spreadsheet_id: "sheet-123".into(),
            }
        );
    }

    #[test]
    fn missing_all() {
        let result = make_sut("CREDS_MISSING").load();

        let Err(LoadCredentialsError::Incomplete(missing)) = result else {
            panic!("expected incomplete credentials");
        };
        assert_eq!(
            missing,
            [
                "CREDS_MISSING_CLIENT_EMAIL",
                "CREDS_MISSING_PRIVATE_KEY",
                "CREDS_MISSING_SPREADSHEET_ID",
            ]
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        std::env::set_var("CREDS_EMPTY_CLIENT_EMAIL", "svc@project.iam.example.com");
        std::env::set_var("CREDS_EMPTY_PRIVATE_KEY", "");
        std::env::set_var("CREDS_EMPTY_SPREADSHEET_ID", "sheet-123");

        let Err(LoadCredentialsError::Incomplete(missing)) = make_sut("CREDS_EMPTY").load() else {
            panic!("expected incomplete credentials");
        };
        assert_eq!(missing, ["CREDS_EMPTY_PRIVATE_KEY"]);
    }
}
