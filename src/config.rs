use serde::Deserialize;
use std::fs;

/// Optional settings file; command-line flags take precedence over it.
#[derive(Debug, Eq, PartialEq, Deserialize)]
pub struct Config {
    pub url: Option<String>,
    pub output_file: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> Self {
        let conf_str = fs::read_to_string(path).expect("Unable to find config file");
        let conf: Config = serde_json::from_str(&conf_str).expect("Unable to parse config");
        conf
    }
}
