use crate::config::ScanConfig;
use crate::domain::Domain;
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, instrument};

// timeouts
const HTTP_REQUEST_TIMEOUT_MS: u64 = 10000;

// what came back over the wire, ready for classification
#[derive(Debug)]
pub struct HttpExchange {
    pub status: StatusCode,
    // None when the diagnostic read of an error body failed
    pub body: Option<String>,
}

#[async_trait]
pub trait Lookup {
    fn name(&self) -> String;

    // the single outbound request of one scan attempt
    async fn fetch(&self, config: &ScanConfig, domain: &Domain) -> reqwest::Result<HttpExchange>;
}

// region:        --- SubdomainApi

pub struct SubdomainApi {
    http_client: Client,
}

impl SubdomainApi {
    pub fn new() -> crate::Result<Self> {
        let http_timeout = Duration::from_millis(HTTP_REQUEST_TIMEOUT_MS);
        let http_client = Client::builder().timeout(http_timeout).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Lookup for SubdomainApi {
    fn name(&self) -> String {
        "subdomains/rapidapi".to_string()
    }

    #[instrument(name = "fetch", level = "info", fields(module = %self.name()), skip_all)]
    async fn fetch(&self, config: &ScanConfig, domain: &Domain) -> reqwest::Result<HttpExchange> {
        let url = format!("https://{}/", config.api_host());

        info!("{:12} - {:?}", "HTTP REQUEST", url);
        let res = self
            .http_client
            .get(&url)
            .query(&[("domain", domain.as_str())])
            // the orchestrator refuses to scan without a key
            .header("x-rapidapi-key", config.api_key().unwrap_or_default())
            .header("x-rapidapi-host", config.api_host())
            // every call must reach the origin, never a cached response
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = res.status();
        info!("{:12} - {:?}", "HTTP STATUS", status);

        if status.is_success() {
            let body = res.text().await?;
            Ok(HttpExchange {
                status,
                body: Some(body),
            })
        } else {
            // best effort, the status alone is enough to classify
            let body = res.text().await.ok();
            Ok(HttpExchange { status, body })
        }
    }
}

// endregion:     --- SubdomainApi
