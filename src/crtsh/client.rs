// crt.sh API client
//
// One HTTP GET with bounded fixed-delay retries. Browser-like headers are
// cosmetic but required to avoid the endpoint's bot filtering.

use super::parser::{self, CrtshRecord};
use crate::error::ScanError;
use crate::Result;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Public crt.sh endpoint
const CRTSH_BASE_URL: &str = "https://crt.sh";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// crt.sh client configuration
#[derive(Debug, Clone)]
pub struct CrtshConfig {
    /// Total request attempts before giving up
    pub retries: u32,
    /// Per-attempt HTTP timeout
    pub timeout: Duration,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
    /// Endpoint base URL, overridable for tests
    pub base_url: String,
}

impl Default for CrtshConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            timeout: Duration::from_secs(30),
            retry_delay: Duration::from_secs(5),
            base_url: CRTSH_BASE_URL.to_string(),
        }
    }
}

/// crt.sh certificate transparency search client
pub struct CrtshClient {
    client: reqwest::Client,
    config: CrtshConfig,
}

impl CrtshClient {
    pub fn new(config: CrtshConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch the deduplicated, suffix-filtered subdomain set for `domain`.
    ///
    /// Any failed attempt (transport error, non-success status, malformed
    /// JSON) is logged and retried after the fixed delay. Once the
    /// configured number of attempts is exhausted the last error escalates
    /// to a fatal `RetriesExhausted`; no partial results are kept.
    pub async fn fetch(&self, domain: &str) -> Result<BTreeSet<String>> {
        let url = format!("{}/?q=%.{}&output=json", self.config.base_url, domain);
        let referer = format!("{}/?q=%.{}", self.config.base_url, domain);
        let retries = self.config.retries.max(1);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.request(&url, &referer).await {
                Ok(records) => {
                    debug!(
                        "crt.sh returned {} records on attempt {}",
                        records.len(),
                        attempt
                    );
                    return Ok(parser::extract_subdomains(&records, domain));
                }
                Err(e) => {
                    warn!("Attempt {}/{} failed: {}", attempt, retries, e);
                    if attempt >= retries {
                        return Err(ScanError::RetriesExhausted {
                            attempts: retries,
                            last_error: e.to_string(),
                        });
                    }
                    warn!("Retrying in {:?}...", self.config.retry_delay);
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    async fn request(&self, url: &str, referer: &str) -> Result<Vec<CrtshRecord>> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(
                reqwest::header::ACCEPT,
                "application/json, text/javascript, */*; q=0.01",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, referer)
            .header(reqwest::header::CONNECTION, "keep-alive")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScanError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
