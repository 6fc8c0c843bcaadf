use crate::client::{FetchError, ForecastSource};
use crate::forecast::ForecastDocument;

use std::fs;
use std::path::PathBuf;

/// Reads the forecast document from a local JSON file, for rendering a
/// previously staged document without hitting the network.
pub struct FileForecastSource {
    path: PathBuf,
}

impl FileForecastSource {
    pub fn new(path: &str) -> FileForecastSource {
        FileForecastSource {
            path: PathBuf::from(path),
        }
    }
}

impl ForecastSource for FileForecastSource {
    fn fetch(&self) -> Result<ForecastDocument, FetchError> {
        info!("Reading forecast from {}", self.path.display());
        let raw = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(ForecastDocument::decode(value)?)
    }
}
