use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::label::{Alphabet, AlphabetError, AlphabetPreset};

/// Title of our own input window. Seeing a window with exactly this name
/// means another instance is already waiting for a key.
pub const SENTINEL_TITLE: &str = "rift-hop\t\t__8d2c41f07a5e4b9c9e13d6f2a0b7c514__";

/// Desktop and panel windows that are never worth switching to.
pub const DEFAULT_DENY_LIST: &[&str] = &["xfce4-panel", "Desktop", "デスクトップ"];

pub const DEFAULT_MARGIN_X: i32 = 4;
pub const DEFAULT_MARGIN_Y: i32 = 0;
/// Screens are wider than tall, so vertical stacking is favoured.
pub const DEFAULT_Y_WEIGHT: f64 = 4.0 / 3.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid labels.alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
    #[error("layout.y_weight must be a positive finite number, got {0}")]
    YWeight(f64),
    #[error("layout margins must not be negative, got margin_x = {0}, margin_y = {1}")]
    Margin(i32, i32),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub labels: LabelSettings,
    pub layout: LayoutSettings,
    pub filter: FilterSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelSettings {
    /// A preset name (`dvorak-left`, `qwerty-both`, ...) or literal letters.
    pub alphabet: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            alphabet: AlphabetPreset::default().to_string(),
        }
    }
}

impl LabelSettings {
    pub fn alphabet(&self) -> Result<Alphabet, AlphabetError> { Alphabet::parse(&self.alphabet) }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    pub margin_x: i32,
    pub margin_y: i32,
    pub y_weight: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            margin_x: DEFAULT_MARGIN_X,
            margin_y: DEFAULT_MARGIN_Y,
            y_weight: DEFAULT_Y_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettings {
    pub deny_list: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&buf).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn parse(buf: &str) -> anyhow::Result<Config> {
        let config: Config = toml::from_str(buf)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.labels.alphabet()?;
        let weight = self.layout.y_weight;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ConfigError::YWeight(weight));
        }
        let LayoutSettings { margin_x, margin_y, .. } = self.layout;
        if margin_x < 0 || margin_y < 0 {
            return Err(ConfigError::Margin(margin_x, margin_y));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.labels.alphabet().unwrap().to_string(), "UEIOA.PYJK");
        assert_eq!(config.layout.margin_x, 4);
        assert_eq!(config.layout.margin_y, 0);
        assert!(config.filter.deny_list.iter().any(|name| name == "xfce4-panel"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [labels]
            alphabet = "qwerty-both"

            [layout]
            margin_y = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.labels.alphabet().unwrap().to_string(), "FDGSARETJKLUIO");
        assert_eq!(config.layout, LayoutSettings {
            margin_y: 2,
            ..LayoutSettings::default()
        });
        assert_eq!(config.filter, FilterSettings::default());
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = Config::parse("[labels]\nalphabet = \"ABCB\"\n").unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err:#}");
    }

    #[test]
    fn rejects_non_positive_weight() {
        let config = Config {
            layout: LayoutSettings {
                y_weight: 0.0,
                ..LayoutSettings::default()
            },
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::YWeight(w)) if w == 0.0));
    }

    #[test]
    fn rejects_negative_margins() {
        let config = Config {
            layout: LayoutSettings {
                margin_y: -1,
                ..LayoutSettings::default()
            },
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Margin(4, -1))));

        let err = Config::parse("[layout]\nmargin_x = -10\n").unwrap_err();
        assert!(err.to_string().contains("must not be negative"), "{err:#}");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::parse("[layout]\nmargin_z = 3\n").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[filter]\ndeny_list = [\"conky\"]").unwrap();
        let config = Config::read(file.path()).unwrap();
        assert_eq!(config.filter.deny_list, vec!["conky".to_string()]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::read(Path::new("/nonexistent/rift-hop.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/rift-hop.toml"));
    }
}
