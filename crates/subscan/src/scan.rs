use crate::config::ScanConfig;
use crate::domain::Domain;
use crate::lookup::{HttpExchange, Lookup};
use crate::model::ScanResult;
use tracing::{error, instrument};

// region:        --- Scan main function

// One scan attempt end to end. Never fails: every outcome, including
// infrastructure trouble, comes back as a ScanResult envelope. At most one
// outbound request per call, none when validation or config short-circuits.
#[instrument(name = "scan", level = "info", skip_all, fields(domain = input))]
pub async fn scan(config: &ScanConfig, lookup: &impl Lookup, input: &str) -> ScanResult {
    // the CLI validates before submitting, revalidate at the trust boundary
    let domain = match Domain::parse(input) {
        Ok(domain) => domain,
        Err(err) => return ScanResult::failure(err.user_message()),
    };

    if config.api_key().is_none() {
        error!("{:12} - RAPIDAPI_KEY is not set", "CONFIG");
        return ScanResult::failure("Server configuration error: API key missing.");
    }

    match lookup.fetch(config, &domain).await {
        Ok(exchange) => classify(&exchange),
        Err(err) => {
            error!("{:12} - {}", "TRANSPORT", err);
            ScanResult::failure(format!("An error occurred: {}", err))
        }
    }
}

// endregion:     --- Scan main function

// region:        --- Response classification

// Pure over (status, body): replaying the same exchange always yields the
// same envelope.
pub fn classify(exchange: &HttpExchange) -> ScanResult {
    let status = exchange.status;

    if !status.is_success() {
        if let Some(body) = &exchange.body {
            error!("{:12} - status {}: {}", "API ERROR", status.as_u16(), body);
        }
        let error = match status.as_u16() {
            429 => "API rate limit exceeded. Please try again later.".to_string(),
            401 | 403 => "API authentication failed. Check server configuration.".to_string(),
            code => format!("Failed to fetch subdomains (Status: {}).", code),
        };
        return ScanResult::failure(error);
    }

    // every element must be a string, anything else is a format mismatch
    let body = exchange.body.as_deref().unwrap_or_default();
    match serde_json::from_str::<Vec<String>>(body) {
        Ok(subdomains) => ScanResult::success(subdomains),
        Err(_) => {
            error!("{:12} - unexpected payload: {}", "API FORMAT", body);
            ScanResult::failure("Received unexpected data format from API.")
        }
    }
}

// endregion:     --- Response classification
