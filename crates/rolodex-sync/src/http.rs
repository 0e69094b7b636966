use crate::source::SeedSource;
use crate::{Result, SyncError};
use rolodex_core::Contact;
use std::time::Duration;

#[cfg(feature = "http-seed")]
const USER_AGENT: &str = "rolodex";

#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    url: String,
    timeout: Duration,
}

impl HttpSeedSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SeedSource for HttpSeedSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    fn fetch_seed(&self) -> Result<Vec<Contact>> {
        fetch_seed(&self.url, self.timeout)
    }
}

#[cfg(feature = "http-seed")]
pub fn fetch_seed(url: &str, timeout: Duration) -> Result<Vec<Contact>> {
    use crate::seed::parse_seed;
    use reqwest::blocking::Client;
    use url::Url;

    let url = Url::parse(url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SyncError::Parse(format!(
            "seed url must use http or https: {url}"
        )));
    }
    if !matches!(url.host_str(), Some(host) if !host.is_empty()) {
        return Err(SyncError::Parse(format!("seed url has no host: {url}")));
    }
    tracing::debug!(%url, "fetching seed");
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .build()?;
    let body = client.get(url).send()?.error_for_status()?.text()?;
    parse_seed(&body)
}

#[cfg(not(feature = "http-seed"))]
pub fn fetch_seed(_url: &str, _timeout: Duration) -> Result<Vec<Contact>> {
    Err(SyncError::Unavailable(
        "seed download requires the http-seed feature".to_string(),
    ))
}
