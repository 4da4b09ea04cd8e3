use std::env;

pub const DEFAULT_API_HOST: &str = "subdomain-scan1.p.rapidapi.com";

// Lookup service settings, read once at startup. A missing key is reported
// as a scan failure, not a startup crash; its value must never be logged.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    api_key: Option<String>,
    api_host: String,
}

impl ScanConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self::new(
            env::var("RAPIDAPI_KEY").ok(),
            env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
        )
    }

    pub fn new(api_key: Option<String>, api_host: String) -> Self {
        Self { api_key, api_host }
    }

    // a blank key counts as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }
}
