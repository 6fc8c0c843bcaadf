use crate::client::{FetchError, ForecastSource};
use crate::forecast::ForecastDocument;

use reqwest::blocking::{Client, ClientBuilder};

/// Fetches the forecast document from an HTTP endpoint. One GET per render,
/// no retries; the transport's default timeout governs.
pub struct HttpForecastSource {
    url: String,
    http_client: Client,
}

impl HttpForecastSource {
    pub fn new(url: String) -> HttpForecastSource {
        HttpForecastSource {
            url,
            http_client: ClientBuilder::new()
                .gzip(true)
                .build()
                .expect("Unable to construct HTTP client"),
        }
    }
}

impl ForecastSource for HttpForecastSource {
    fn fetch(&self) -> Result<ForecastDocument, FetchError> {
        info!("Fetching forecast: {}", self.url);
        let res = self.http_client.get(&self.url).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }
        let value: serde_json::Value = res.json()?;
        Ok(ForecastDocument::decode(value)?)
    }
}
