use crate::shared::sheets::auth::ServiceAccountKey;

const SERVICE_ACCOUNT_KEY_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";
const SPREADSHEET_ID_VAR: &str = "GOOGLE_SPREADSHEET_ID";

/// Deployment configuration of the Sheets integration: the service-account
/// credential and the spreadsheet it writes to.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub key: ServiceAccountKey,
    pub spreadsheet_id: String,
}

impl SheetsConfig {
    /// Load configuration from the process environment.
    ///
    /// Error messages name the variable at fault but never echo credential
    /// contents; callers surface them as a generic 500.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_key = std::env::var(SERVICE_ACCOUNT_KEY_VAR)
            .map_err(|_| anyhow::anyhow!("{} is not set", SERVICE_ACCOUNT_KEY_VAR))?;
        let key: ServiceAccountKey = serde_json::from_str(&raw_key)
            .map_err(|_| anyhow::anyhow!("{} is not a valid service account key", SERVICE_ACCOUNT_KEY_VAR))?;

        let spreadsheet_id = std::env::var(SPREADSHEET_ID_VAR)
            .map_err(|_| anyhow::anyhow!("{} is not set", SPREADSHEET_ID_VAR))?;

        Ok(Self {
            key,
            spreadsheet_id,
        })
    }
}
