use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// How a rule written against "A or B" reads its two fields: `Either`
// consults both, `FirstOnly` consults A alone.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossFieldMode {
    #[default]
    Either,
    FirstOnly,
}

impl CrossFieldMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Either => "either",
            Self::FirstOnly => "first-only",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cross_field_mode: CrossFieldMode,
    pub use_table_header: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cross_field_mode: CrossFieldMode::Either,
            use_table_header: true,
        }
    }
}

impl EngineConfig {
    pub fn load(path: Option<&Path>, mode_override: Option<CrossFieldMode>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw =
                    fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_slice::<EngineConfig>(&raw)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(mode) = mode_override {
            config.cross_field_mode = mode;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{CrossFieldMode, EngineConfig};

    #[test]
    fn config_deserializes_with_defaults_for_missing_keys() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "cross_field_mode": "first-only" }"#)
                .expect("partial config should deserialize");
        assert_eq!(config.cross_field_mode, CrossFieldMode::FirstOnly);
        assert!(config.use_table_header);
    }

    #[test]
    fn cli_override_wins_over_defaults() {
        let config =
            EngineConfig::load(None, Some(CrossFieldMode::FirstOnly)).expect("config should load");
        assert_eq!(config.cross_field_mode, CrossFieldMode::FirstOnly);
        assert_eq!(config.cross_field_mode.as_str(), "first-only");
    }
}
