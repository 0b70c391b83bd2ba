use crate::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT_NAME, DEFAULT_TIMEOUT_MS};
use crate::error::RangeFinderError;
use log::info;
use rangefinder_data::{WireFormat, BAUD_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Deployment settings of the range finder link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub serial: SerialConfig,
    pub protocol: ProtocolConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    pub wire_format: WireFormat,
    /// Append `\r\n` to scan commands. The firmware expects them bare.
    pub terminate_commands: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub poll_interval_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT_NAME.to_string(),
            baud_rate: BAUD_RATE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, RangeFinderError> {
        let path = path.as_ref();

        if path.exists() {
            let content = fs::read_to_string(path)?;
            Config::from_toml(&content)
        } else {
            let default_config = Config::default();
            fs::write(path, default_config.to_toml()?)?;
            info!(target: "rangefinder::config", "Created default config file at {}", path.display());
            Ok(default_config)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, RangeFinderError> {
        let config: Config = toml::from_str(content)?;
        if config.serial.baud_rate == 0 {
            return Err(RangeFinderError::ConfigError(
                "serial.baud_rate must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, RangeFinderError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.serial.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.session.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.protocol.wire_format, WireFormat::Spherical);
        assert!(!config.protocol.terminate_commands);
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml(
            r#"
            [serial]
            port = "COM6"

            [protocol]
            wire_format = "cartesian"
            "#,
        )
        .unwrap();
        assert_eq!(config.serial.port, "COM6");
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.protocol.wire_format, WireFormat::Cartesian);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        assert!(matches!(
            Config::from_toml("[protocol]\nwire_format = \"polar\"\n"),
            Err(RangeFinderError::ConfigError(_))
        ));
        assert!(matches!(
            Config::from_toml("[serial]\nbaud_rate = 0\n"),
            Err(RangeFinderError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_or_create() {
        let dir = std::env::temp_dir().join(format!("rangefinder-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rangefinder.toml");
        let _ = fs::remove_file(&path);

        let created = Config::load_or_create(&path).unwrap();
        assert!(path.exists());
        let loaded = Config::load_or_create(&path).unwrap();
        assert_eq!(created, loaded);

        fs::remove_dir_all(&dir).unwrap();
    }
}
