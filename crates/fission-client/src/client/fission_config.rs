//! Fission client configuration
//!
//! This module provides configuration structures and builders for the Fission client.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use url::Url;

use crate::error::{Error, Result};

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout: 10 seconds.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upload ceiling enforced before a request is sent: 100 MB.
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 100_000_000;

/// Configuration for the Fission client
///
/// Contains all the settings needed to configure the Fission client behavior,
/// including the gateway endpoint, timeouts, and the upload ceiling.
#[derive(Debug, Clone, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(
    name = "FissionBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct FissionConfig {
    /// Base URL of the Fission gateway
    #[cfg_attr(
        feature = "config",
        arg(
            long = "fission-base-url",
            env = "FISSION_BASE_URL",
            default_value = "https://hostless.dev"
        )
    )]
    #[builder(setter(custom), default = "FissionConfig::default_base_url()")]
    pub base_url: Url,
    /// Request timeout duration
    #[cfg_attr(
        feature = "config",
        arg(
            long = "fission-timeout-secs",
            env = "FISSION_TIMEOUT_SECS",
            default_value = "30",
            value_parser = parse_secs
        )
    )]
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[cfg_attr(
        feature = "config",
        arg(
            long = "fission-connect-timeout-secs",
            env = "FISSION_CONNECT_TIMEOUT_SECS",
            default_value = "10",
            value_parser = parse_secs
        )
    )]
    #[builder(default = "DEFAULT_CONNECT_TIMEOUT")]
    pub connect_timeout: Duration,
    /// User agent string for requests
    #[cfg_attr(
        feature = "config",
        arg(
            long = "fission-user-agent",
            env = "FISSION_USER_AGENT",
            default_value_t = FissionConfig::default_user_agent()
        )
    )]
    #[builder(default = "FissionConfig::default_user_agent()")]
    pub user_agent: String,
    /// Maximum upload size in bytes, enforced before a request is sent
    #[cfg_attr(
        feature = "config",
        arg(
            long = "fission-max-content-length",
            env = "FISSION_MAX_CONTENT_LENGTH",
            default_value_t = DEFAULT_MAX_CONTENT_LENGTH
        )
    )]
    #[builder(default = "DEFAULT_MAX_CONTENT_LENGTH")]
    pub max_content_length: u64,
}

#[cfg(feature = "config")]
fn parse_secs(value: &str) -> std::result::Result<Duration, std::num::ParseIntError> {
    Ok(Duration::from_secs(value.parse()?))
}

impl Default for FissionConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: Self::default_user_agent(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl FissionConfig {
    /// Create a new configuration builder
    pub fn builder() -> FissionBuilder {
        FissionBuilder::default()
    }

    fn default_base_url() -> Url {
        "https://hostless.dev".parse().expect("Valid default URL")
    }

    fn default_user_agent() -> String {
        format!("fission-client/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl FissionBuilder {
    /// Set the base URL of the Fission gateway
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url =
            Some(url.parse().map_err(|e| {
                Error::invalid_config(format!("Invalid base URL '{}': {}", url, e))
            })?);
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = &self.timeout {
            if timeout.is_zero() {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        if let Some(connect_timeout) = &self.connect_timeout {
            if connect_timeout.is_zero() {
                return Err("Connect timeout must be greater than 0".to_string());
            }
        }

        if let Some(max_content_length) = &self.max_content_length {
            if *max_content_length == 0 {
                return Err("Max content length must be greater than 0".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FissionConfig::default();

        assert_eq!(config.base_url.as_str(), "https://hostless.dev/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.max_content_length, 100_000_000);
        assert!(config.user_agent.starts_with("fission-client/"));
    }

    #[test]
    fn test_config_builder() {
        let config = FissionConfig::builder()
            .with_timeout(Duration::from_secs(120))
            .with_max_content_length(1_000_000u64)
            .build()
            .expect("Valid config");

        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.max_content_length, 1_000_000);
        assert_eq!(config.base_url.as_str(), "https://hostless.dev/");
    }

    #[test]
    fn test_custom_base_url() {
        let config = FissionConfig::builder()
            .with_base_url("https://runfission.com")
            .expect("Valid URL")
            .build()
            .expect("Valid config");

        assert_eq!(config.base_url.as_str(), "https://runfission.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = FissionConfig::builder().with_base_url("not-a-valid-url");

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let result = FissionConfig::builder()
            .with_timeout(Duration::from_secs(0))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_zero_max_content_length() {
        let result = FissionConfig::builder()
            .with_max_content_length(0u64)
            .build();

        assert!(result.is_err());
    }
}

#[cfg(all(test, feature = "config"))]
mod config_feature_tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: FissionConfig,
    }

    #[test]
    fn test_args_defaults_match_config_defaults() {
        let cli = Cli::parse_from(["test"]);
        let defaults = FissionConfig::default();

        assert_eq!(cli.config.base_url, defaults.base_url);
        assert_eq!(cli.config.timeout, defaults.timeout);
        assert_eq!(cli.config.connect_timeout, defaults.connect_timeout);
        assert_eq!(cli.config.user_agent, defaults.user_agent);
        assert_eq!(cli.config.max_content_length, defaults.max_content_length);
    }

    #[test]
    fn test_args_override_defaults() {
        let cli = Cli::parse_from([
            "test",
            "--fission-base-url",
            "https://runfission.com",
            "--fission-timeout-secs",
            "120",
            "--fission-max-content-length",
            "1000000",
        ]);

        assert_eq!(cli.config.base_url.as_str(), "https://runfission.com/");
        assert_eq!(cli.config.timeout, Duration::from_secs(120));
        assert_eq!(cli.config.max_content_length, 1_000_000);
    }
}
