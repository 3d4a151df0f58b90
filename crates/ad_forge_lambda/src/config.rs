use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str =
    "https://7i5316q6o2.execute-api.ap-south-1.amazonaws.com/Prod";
pub const API_BASE_URL_ENV: &str = "AD_FORGE_API_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL '{value}' is invalid: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Location of the forge backend's API stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    api_base_url: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ForgeConfig {
    pub fn with_base_url(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            reason,
        };

        let url = Url::parse(trimmed).map_err(|error| invalid(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Apply an optional override; missing or blank values keep the default.
    pub fn from_override(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::with_base_url(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_override(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn forge_url(&self) -> String {
        format!("{}/forge", self.api_base_url)
    }

    pub fn status_url(&self) -> String {
        format!("{}/status", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_prod_stage() {
        let config = ForgeConfig::default();
        assert_eq!(
            config.forge_url(),
            "https://7i5316q6o2.execute-api.ap-south-1.amazonaws.com/Prod/forge"
        );
    }

    #[test]
    fn blank_override_keeps_default() {
        assert_eq!(
            ForgeConfig::from_override(Some("  ")),
            Ok(ForgeConfig::default())
        );
        assert_eq!(ForgeConfig::from_override(None), Ok(ForgeConfig::default()));
    }

    #[test]
    fn override_strips_trailing_slash() {
        let config = ForgeConfig::from_override(Some("http://127.0.0.1:3000/Dev/"))
            .expect("override should parse");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:3000/Dev");
        assert_eq!(config.status_url(), "http://127.0.0.1:3000/Dev/status");
    }

    #[test]
    fn rejects_non_http_schemes() {
        let error = ForgeConfig::with_base_url("ftp://example.com/Prod")
            .expect_err("ftp should be rejected");
        assert!(error.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(ForgeConfig::with_base_url("not a url").is_err());
    }
}
