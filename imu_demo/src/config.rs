use std::fs::read_to_string;
use std::path::Path;

use imu_traits::{AccelRange, ImuError, ImuResult, Settings};
use ron::extensions::Extensions;
use ron::Options;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_SETTINGS;

/// Configuration of the demo, usually read from a RON file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Value handed to the backend `configure` call.
    pub settings: Settings,
    /// Range used to express the raw sample in g in the logs.
    pub range: AccelRange,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            settings: DEFAULT_SETTINGS,
            range: AccelRange::default(),
        }
    }
}

impl DemoConfig {
    /// Replaces the settings value when one was given on the command line.
    pub fn with_settings_override(mut self, settings: Option<i32>) -> Self {
        if let Some(settings) = settings {
            self.settings = Settings(settings);
        }
        self
    }

    pub fn get_options() -> Options {
        Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .with_default_extension(Extensions::UNWRAP_NEWTYPES)
    }

    pub fn serialize(&self) -> ImuResult<String> {
        let pretty = ron::ser::PrettyConfig::default();
        Self::get_options()
            .to_string_pretty(self, pretty)
            .map_err(|e| ImuError::new_with_cause("Could not serialize the configuration", e))
    }

    pub fn deserialize(ron: &str) -> ImuResult<Self> {
        Self::get_options()
            .from_str(ron)
            .map_err(|e| ImuError::new_with_cause("Syntax Error in config", e))
    }
}

pub fn read_configuration(config_filename: &Path) -> ImuResult<DemoConfig> {
    let config_content = read_to_string(config_filename).map_err(|e| {
        ImuError::new_with_cause(
            &format!(
                "Failed to read configuration file: {}",
                config_filename.display()
            ),
            e,
        )
    })?;
    DemoConfig::deserialize(&config_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gives_defaults() {
        let config = DemoConfig::deserialize("()").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.settings, Settings(42));
        assert_eq!(config.range, AccelRange::G16);
    }

    #[test]
    fn test_partial_config() {
        let config = DemoConfig::deserialize("(settings: -7)").unwrap();
        assert_eq!(config.settings, Settings(-7));
        assert_eq!(config.range, AccelRange::G16);

        let config = DemoConfig::deserialize("(range: G4)").unwrap();
        assert_eq!(config.settings, DEFAULT_SETTINGS);
        assert_eq!(config.range, AccelRange::G4);
    }

    #[test]
    fn test_settings_override() {
        let from_file = DemoConfig::deserialize("(settings: 7, range: G2)").unwrap();

        let overridden = from_file.with_settings_override(Some(-5));
        assert_eq!(overridden.settings, Settings(-5));
        assert_eq!(overridden.range, AccelRange::G2);

        let kept = from_file.with_settings_override(None);
        assert_eq!(kept.settings, Settings(7));
    }

    #[test]
    fn test_serialize_then_parse_back() {
        let config = DemoConfig {
            settings: Settings(1234),
            range: AccelRange::G8,
        };
        let text = config.serialize().unwrap();
        assert_eq!(DemoConfig::deserialize(&text).unwrap(), config);
    }

    #[test]
    fn test_syntax_error() {
        let err = DemoConfig::deserialize("(settings: ").unwrap_err();
        assert_eq!(err.message(), "Syntax Error in config");
        assert!(err.cause().is_some());
    }
}
