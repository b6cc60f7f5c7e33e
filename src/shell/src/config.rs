use anyhow::{Context, Result};
use std::{env, time::Duration};

const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shell configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Base URL of the device agent, without trailing slash
    pub device_url: String,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl ShellConfig {
    /// Load the configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let device_url = lookup("WIFI_SETUP_DEVICE_URL")
            .unwrap_or_else(|| DEFAULT_DEVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        anyhow::ensure!(
            device_url.starts_with("http://") || device_url.starts_with("https://"),
            "failed to parse WIFI_SETUP_DEVICE_URL: expected http(s) URL, got {device_url:?}"
        );

        let timeout_secs = lookup("WIFI_SETUP_REQUEST_TIMEOUT_SECS")
            .map(|value| value.parse::<u64>())
            .transpose()
            .context("failed to parse WIFI_SETUP_REQUEST_TIMEOUT_SECS: invalid format")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        anyhow::ensure!(
            timeout_secs > 0,
            "failed to parse WIFI_SETUP_REQUEST_TIMEOUT_SECS: must be at least 1"
        );

        Ok(Self {
            device_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
