use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::Deserialize;

fn default_port() -> u16 { 3000 }
fn default_timeout_secs() -> u64 { 30 }
fn default_geocoder_endpoint() -> String { "https://nominatim.openstreetmap.org/search".to_string() }
fn default_user_agent() -> String { format!("orc-fluid-advisor/{}", env!("CARGO_PKG_VERSION")) }
fn default_irradiance_endpoint() -> String { "https://power.larc.nasa.gov/api/temporal/daily/point".to_string() }
fn default_parameter() -> String { "ALLSKY_SFC_SW_DWN".to_string() }
fn default_community() -> String { "RE".to_string() }
fn default_start() -> NaiveDate { NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date") }
fn default_end() -> NaiveDate { NaiveDate::from_ymd_opt(2023, 1, 31).expect("valid date") }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub irradiance: IrradianceConfig,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,
    /// Sent as the User-Agent header; the public Nominatim instance refuses anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// NASA POWER daily point query. The date window is fixed per deployment,
/// it is never derived from the current date.
#[derive(Debug, Deserialize, Clone)]
pub struct IrradianceConfig {
    #[serde(default = "default_irradiance_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_parameter")]
    pub parameter: String,
    #[serde(default = "default_community")]
    pub community: String,
    #[serde(default = "default_start")]
    pub start: NaiveDate,
    #[serde(default = "default_end")]
    pub end: NaiveDate,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for IrradianceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_irradiance_endpoint(),
            parameter: default_parameter(),
            community: default_community(),
            start: default_start(),
            end: default_end(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            geocoder: GeocoderConfig::default(),
            irradiance: IrradianceConfig::default(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration file, falling back to built-in defaults when it does not exist.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            tracing::warn!("{} not found, using built-in defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path))?;
        Self::from_json(&content).with_context(|| format!("loading {}", path))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.geocoder.endpoint.trim().is_empty() {
            bail!("geocoder.endpoint must not be empty");
        }
        if self.irradiance.endpoint.trim().is_empty() {
            bail!("irradiance.endpoint must not be empty");
        }
        if self.irradiance.parameter.trim().is_empty() {
            bail!("irradiance.parameter must not be empty");
        }
        if self.irradiance.start > self.irradiance.end {
            bail!(
                "irradiance.start ({}) is after irradiance.end ({})",
                self.irradiance.start, self.irradiance.end
            );
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let c = Config::from_json("{}").unwrap();
        assert_eq!(c.server.port, 3000);
        assert_eq!(c.request_timeout_secs, 30);
        assert_eq!(c.irradiance.parameter, "ALLSKY_SFC_SW_DWN");
        assert_eq!(c.irradiance.community, "RE");
        assert_eq!(c.irradiance.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(c.irradiance.end, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
        assert!(c.geocoder.user_agent.starts_with("orc-fluid-advisor/"));
    }

    #[test]
    fn test_default_window_is_january_2023() {
        let irr = IrradianceConfig::default();
        assert_eq!(irr.start.format("%Y%m%d").to_string(), "20230101");
        assert_eq!(irr.end.format("%Y%m%d").to_string(), "20230131");
    }

    #[test]
    fn test_partial_override() {
        let c = Config::from_json(r#"{
            "server": { "port": 8080 },
            "irradiance": { "start": "2024-06-01", "end": "2024-06-30" }
        }"#).unwrap();
        assert_eq!(c.server.port, 8080);
        assert_eq!(c.irradiance.start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(c.irradiance.endpoint, default_irradiance_endpoint());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = Config::from_json(r#"{ "irradiance": { "start": "2023-02-01", "end": "2023-01-01" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("after"), "unexpected error: {}", err);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Config::from_json(r#"{ "request_timeout_secs": 0 }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let c = Config::load("does-not-exist.json").unwrap();
        assert_eq!(c.server.port, 3000);
    }
}
