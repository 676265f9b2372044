//! # Configuration
//!
//! Timings for the simulated operations and thresholds for expiry banding.
//! Every field has a default, so an empty TOML document is a valid config
//! and a file only needs the values it overrides:
//!
//! ```toml
//! [simulation]
//! batch_search_delay_ms = 250
//!
//! [expiry]
//! expiring_soon_days = 60
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ExpiryThresholds;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedCheckConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub expiry: ExpiryConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub sms: SmsConfig,
}

/// Artificial latency, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub scan_delay_ms: u64,
    /// Pause between a scan completing and the result screen opening
    pub scan_handoff_delay_ms: u64,
    pub batch_search_delay_ms: u64,
    pub sms_send_delay_ms: u64,
    pub sms_reply_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scan_delay_ms: 2500,
            scan_handoff_delay_ms: 500,
            batch_search_delay_ms: 1000,
            sms_send_delay_ms: 1000,
            sms_reply_delay_ms: 2000,
        }
    }
}

impl SimulationConfig {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn scan_handoff_delay(&self) -> Duration {
        Duration::from_millis(self.scan_handoff_delay_ms)
    }

    pub fn batch_search_delay(&self) -> Duration {
        Duration::from_millis(self.batch_search_delay_ms)
    }

    pub fn sms_send_delay(&self) -> Duration {
        Duration::from_millis(self.sms_send_delay_ms)
    }

    pub fn sms_reply_delay(&self) -> Duration {
        Duration::from_millis(self.sms_reply_delay_ms)
    }

    /// All delays zero, for hosts that want instant answers.
    pub fn instant() -> Self {
        Self {
            scan_delay_ms: 0,
            scan_handoff_delay_ms: 0,
            batch_search_delay_ms: 0,
            sms_send_delay_ms: 0,
            sms_reply_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExpiryConfig {
    pub critical_days: i64,
    pub expiring_soon_days: i64,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        let thresholds = ExpiryThresholds::default();
        Self {
            critical_days: thresholds.critical_days,
            expiring_soon_days: thresholds.expiring_soon_days,
        }
    }
}

impl ExpiryConfig {
    pub fn thresholds(&self) -> ExpiryThresholds {
        ExpiryThresholds {
            critical_days: self.critical_days,
            expiring_soon_days: self.expiring_soon_days,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectoryConfig {
    /// How many verified pharmacies "find nearby" returns
    pub nearby_limit: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { nearby_limit: 4 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SmsConfig {
    /// Short code verification texts are sent to
    pub shortcode: String,
    /// Word that prefixes the batch number in the message body
    pub keyword: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            shortcode: "8198".to_string(),
            keyword: "MED".to_string(),
        }
    }
}

impl MedCheckConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.expiry.critical_days > self.expiry.expiring_soon_days {
            return Err(ConfigError::Invalid(format!(
                "expiry.critical_days ({}) exceeds expiry.expiring_soon_days ({})",
                self.expiry.critical_days, self.expiry.expiring_soon_days
            )));
        }
        if self.sms.shortcode.trim().is_empty() {
            return Err(ConfigError::Invalid("sms.shortcode is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_defaults() {
        let config = MedCheckConfig::from_toml_str("").unwrap();
        assert_eq!(config, MedCheckConfig::default());
        assert_eq!(config.simulation.batch_search_delay(), Duration::from_millis(1000));
        assert_eq!(config.directory.nearby_limit, 4);
        assert_eq!(config.sms.shortcode, "8198");
    }

    #[test]
    fn test_partial_override() {
        let config = MedCheckConfig::from_toml_str(
            r#"
            [simulation]
            scan_delay_ms = 10

            [expiry]
            expiring_soon_days = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.scan_delay_ms, 10);
        assert_eq!(config.simulation.sms_reply_delay_ms, 2000);
        assert_eq!(config.expiry.thresholds().expiring_soon_days, 60);
        assert_eq!(config.expiry.critical_days, 30);
    }

    #[test]
    fn test_parse_error() {
        let result = MedCheckConfig::from_toml_str("[simulation]\nscan_delay_ms = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_thresholds() {
        let result = MedCheckConfig::from_toml_str(
            "[expiry]\ncritical_days = 120\nexpiring_soon_days = 90",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[directory]\nnearby_limit = 2").unwrap();
        let config = MedCheckConfig::load(file.path()).unwrap();
        assert_eq!(config.directory.nearby_limit, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = MedCheckConfig::load("/nonexistent/medcheck.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
