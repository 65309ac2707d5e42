use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use match_core::FetchParams;
use match_logging::{match_info, match_warn};
use thiserror::Error;

use crate::{
    mock_jobs, ClientError, ClientSettings, DecisionSink, FallbackJobSource, JobSource,
    MockMatchingClient, ReqwestMatchingClient,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("matching client could not be built: {0}")]
    Client(#[from] ClientError),
}

/// Runtime configuration, read from `MATCH_*` environment variables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub client: ClientSettings,
    pub use_mock_data: bool,
    /// Serve the built-in batch when the API cannot be reached.
    pub fallback_to_mock: bool,
    pub fetch: FetchParams,
    pub state_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            client: ClientSettings::default(),
            use_mock_data: false,
            fallback_to_mock: true,
            fetch: FetchParams::default(),
            state_dir: PathBuf::from(".volunteer_match"),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let client = ClientSettings {
            base_url: lookup("MATCH_API_URL")
                .unwrap_or_else(|| default_for("MATCH_API_URL", defaults.client.base_url)),
            api_token: lookup("MATCH_API_TOKEN").filter(|token| !token.trim().is_empty()),
            connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "MATCH_CONNECT_TIMEOUT_SECS",
                defaults.client.connect_timeout.as_secs(),
            )?),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "MATCH_REQUEST_TIMEOUT_SECS",
                defaults.client.request_timeout.as_secs(),
            )?),
        };

        let radius_miles: f64 =
            parse_or(&lookup, "MATCH_RADIUS_MILES", defaults.fetch.radius_miles)?;
        if !radius_miles.is_finite() || radius_miles <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "MATCH_RADIUS_MILES",
                value: radius_miles.to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        Ok(Self {
            client,
            use_mock_data: parse_flag(&lookup, "MATCH_USE_MOCK_DATA", defaults.use_mock_data)?,
            fallback_to_mock: parse_flag(
                &lookup,
                "MATCH_FALLBACK_TO_MOCK",
                defaults.fallback_to_mock,
            )?,
            fetch: FetchParams {
                radius_miles,
                limit: parse_or(&lookup, "MATCH_JOB_LIMIT", defaults.fetch.limit)?,
            },
            state_dir: lookup("MATCH_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_dir),
        })
    }

    /// Job source and decision sink selected by this config.
    pub fn build_services(
        &self,
    ) -> Result<(Arc<dyn JobSource>, Arc<dyn DecisionSink>), ConfigError> {
        if self.use_mock_data {
            match_info!("Using built-in mock jobs");
            let mock = Arc::new(MockMatchingClient::new());
            let source: Arc<dyn JobSource> = mock.clone();
            let sink: Arc<dyn DecisionSink> = mock;
            return Ok((source, sink));
        }

        let client = ReqwestMatchingClient::new(self.client.clone())?;
        let sink: Arc<dyn DecisionSink> = Arc::new(client.clone());
        let source: Arc<dyn JobSource> = if self.fallback_to_mock {
            Arc::new(FallbackJobSource::new(client, mock_jobs(chrono::Utc::now())))
        } else {
            Arc::new(client)
        };
        Ok((source, sink))
    }
}

fn default_for<T: Display>(key: &str, default: T) -> T {
    match_info!("{key} not set, using default: {default}");
    default
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default_for(key, default)),
        Some(raw) => raw.trim().parse().map_err(|err: T::Err| {
            match_warn!("Invalid {key} value: {err}");
            ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: err.to_string(),
            }
        }),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default_for(key, default));
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected true or false".to_string(),
        }),
    }
}
