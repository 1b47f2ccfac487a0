//! Config file handling.
//!
//! The file is TOML:
//!
//! ```toml
//! key = "0123-4567"
//! verify_tls = true
//! ```
//!
//! Location precedence: `--config`, then `$BINARYEDGE_CONFIG`, then
//! `<config dir>/binaryedge/config.toml`. `$BINARYEDGE_API_KEY` overrides the
//! stored key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "BINARYEDGE_CONFIG";
pub const API_KEY_ENV: &str = "BINARYEDGE_API_KEY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot determine a config directory, pass --config <PATH>")]
    NoConfigDir,

    #[error("failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("failed to write config file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("no API key configured, run `binaryedge config --key <KEY>`")]
    MissingKey,
}

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_tls: Option<bool>,
}

/// Settings the API commands run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub key: String,
    pub verify_tls: bool,
}

impl ResolvedConfig {
    /// Merge the file, the key from the environment and the `--no-verify` flag.
    ///
    /// TLS verification stays on unless either the flag or the file turns it off.
    pub fn resolve(
        file: Option<&ConfigFile>,
        env_key: Option<String>,
        no_verify: bool,
    ) -> Result<Self, ConfigError> {
        let key = env_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| file.and_then(|file| file.key.clone()))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingKey)?;

        let file_verify = file.and_then(|file| file.verify_tls).unwrap_or(true);

        Ok(Self {
            key,
            verify_tls: file_verify && !no_verify,
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("binaryedge").join("config.toml"))
}

/// Pick the config file location; `env_path` is the value of `BINARYEDGE_CONFIG`.
pub fn config_path(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path);
    }
    default_config_path().ok_or(ConfigError::NoConfigDir)
}

/// Load the config file.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Write `config` to `path`, creating parent directories.
pub fn save_config_file(path: &Path, config: &ConfigFile) -> Result<(), ConfigError> {
    let write_error = |reason: String| ConfigError::WriteError {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }

    let contents = toml::to_string(config).map_err(|e| write_error(e.to_string()))?;
    std::fs::write(path, contents).map_err(|e| write_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = load_config_file(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn saved_file_round_trips_and_creates_parents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("binaryedge").join("config.toml");
        let config = ConfigFile {
            key: Some(String::from("abc-123")),
            verify_tls: None,
        };

        save_config_file(&path, &config).expect("save");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.trim(), r#"key = "abc-123""#);
        assert_eq!(load_config_file(&path).expect("load"), Some(config));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "key = \n").expect("write");

        let error = load_config_file(&path).expect_err("must fail");
        assert!(matches!(error, ConfigError::ParseError { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "key = \"k\"\napi_url = \"x\"\n").expect("write");

        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn environment_key_overrides_file_key() {
        let file = ConfigFile {
            key: Some(String::from("from-file")),
            verify_tls: None,
        };

        let resolved =
            ResolvedConfig::resolve(Some(&file), Some(String::from("from-env")), false).expect("key");
        assert_eq!(resolved.key, "from-env");
        assert!(resolved.verify_tls);

        let resolved = ResolvedConfig::resolve(Some(&file), Some(String::from("  ")), false)
            .expect("blank env falls back");
        assert_eq!(resolved.key, "from-file");
    }

    #[test]
    fn missing_key_is_reported() {
        assert_eq!(
            ResolvedConfig::resolve(None, None, false),
            Err(ConfigError::MissingKey)
        );
        assert_eq!(
            ResolvedConfig::resolve(Some(&ConfigFile::default()), None, false),
            Err(ConfigError::MissingKey)
        );
    }

    #[test]
    fn tls_verification_can_be_disabled_by_flag_or_file() {
        let file = ConfigFile {
            key: Some(String::from("k")),
            verify_tls: Some(false),
        };
        assert!(!ResolvedConfig::resolve(Some(&file), None, false).expect("key").verify_tls);

        let file = ConfigFile {
            verify_tls: Some(true),
            ..file
        };
        assert!(!ResolvedConfig::resolve(Some(&file), None, true).expect("key").verify_tls);
    }

    #[test]
    fn explicit_path_wins_over_environment() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        let env = PathBuf::from("/tmp/env.toml");

        assert_eq!(
            config_path(Some(explicit.as_path()), Some(env.clone())).expect("path"),
            explicit
        );
        assert_eq!(config_path(None, Some(env.clone())).expect("path"), env);
    }
}
