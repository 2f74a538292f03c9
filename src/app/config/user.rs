use crate::error::ConfigError;
use crate::player::AppVariant;
use serde::{Deserialize, Serialize};

/// User-editable configuration
/// stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Apps to switch through when none are given on the command line
    #[serde(default = "default_sequence")]
    pub sequence: Vec<AppVariant>,
    /// Log file name, relative to the config dir unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_sequence() -> Vec<AppVariant> {
    vec![AppVariant::Apple, AppVariant::Google]
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            log_file: None,
        }
    }
}

impl UserConfig {
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
