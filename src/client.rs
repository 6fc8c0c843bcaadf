pub mod file;
pub mod http;

use crate::forecast::{DecodeError, ForecastDocument};

use reqwest::StatusCode;

use std::fmt;
use std::io;

/// Something that can produce a forecast document for rendering.
pub trait ForecastSource {
    fn fetch(&self) -> Result<ForecastDocument, FetchError>;
}

/// Any failure between asking for the document and having it decoded.
/// The user-visible outcome is the same for every variant; the detail is
/// only logged.
#[derive(Debug)]
pub enum FetchError {
    Http { err: reqwest::Error },
    Status { status: StatusCode, url: String },
    Io { err: io::Error },
    Parse { err: serde_json::Error },
    Decode { err: DecodeError },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http { err }
    }
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        FetchError::Io { err }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse { err }
    }
}

impl From<DecodeError> for FetchError {
    fn from(err: DecodeError) -> Self {
        FetchError::Decode { err }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { err } => write!(f, "HTTP request failed: {err}"),
            FetchError::Status { status, url } => {
                write!(f, "forecast endpoint returned status {status} for URL {url}")
            }
            FetchError::Io { err } => write!(f, "unable to read forecast file: {err}"),
            FetchError::Parse { err } => write!(f, "unable to parse forecast JSON: {err}"),
            FetchError::Decode { err } => write!(f, "unexpected forecast shape: {err}"),
        }
    }
}
