use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod user;

pub use user::UserConfig;

use crate::error::ConfigError;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("podswitch")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Load `~/.config/podswitch/config.toml`, defaults if it doesn't exist
    pub fn load() -> Result<UserConfig, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(UserConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where the configured log file lives, if any.
    pub fn log_path(config: &UserConfig) -> Option<PathBuf> {
        let file = config.log_file.as_deref()?;
        let path = Path::new(file);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(Self::get_config_dir().join(path))
        }
    }
}
