use directories::BaseDirs;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::api::request::{DEFAULT_ENDPOINT, default_endpoint};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Optional overrides read from `unipass-check.toml`. Nothing is ever written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("unipass-check.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::toml_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text).unwrap_or_else(|e| {
                warn!("ignoring {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn endpoint_url(&self) -> Url {
        Url::parse(&self.endpoint).unwrap_or_else(|e| {
            warn!("endpoint {:?} is not a valid URL ({e}), using default", self.endpoint);
            default_endpoint()
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let s = Settings::from_toml("").unwrap();
        assert_eq!(s.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(s.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_read() {
        let s = Settings::from_toml("endpoint = \"http://localhost:8080/unipass\"\ntimeout_secs = 3\n")
            .unwrap();
        assert_eq!(s.endpoint_url().as_str(), "http://localhost:8080/unipass");
        assert_eq!(s.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn bad_endpoint_falls_back() {
        let s = Settings {
            endpoint: "not a url".into(),
            timeout_secs: 0,
        };
        assert_eq!(s.endpoint_url().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(s.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Settings::from_toml("timeout_secs = \"soon\"").is_err());
    }
}
