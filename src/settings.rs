//! Layered settings for both binaries.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file given
//! with `--config`, environment variables, command-line flags. The binaries
//! apply their flags on top of what [`CirconusSettings::load`] and
//! [`RaspbianSettings::load`] return.

use std::path::Path;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::duration::parse_duration;

/// Environment prefix for `circonus-configure` (`CIRCONUS_API_TOKEN`, ...).
pub const CIRCONUS_ENV_PREFIX: &str = "CIRCONUS";

/// Environment prefix for `list-raspbian-urls` (`RASPBIAN_MIRROR`, ...).
pub const RASPBIAN_ENV_PREFIX: &str = "RASPBIAN";

pub const DEFAULT_MIRROR: &str = "http://mirrordirector.raspbian.org/raspbian";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },

    #[error("No API token given; pass --api-token or set CIRCONUS_API_TOKEN")]
    MissingToken,
}

/// Settings for `circonus-configure`.
#[derive(Debug, Clone, Deserialize)]
pub struct CirconusSettings {
    #[serde(default)]
    pub api_token: Option<String>,
    pub api_url: String,
    pub app_name: String,
    pub tag_category: String,
    pub timeout: String,
}

impl CirconusSettings {
    /// Load from defaults, `path` and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, Environment::with_prefix(CIRCONUS_ENV_PREFIX))
    }

    /// Load with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .set_default("api_url", circonus_client::DEFAULT_API_URL)?
            .set_default("app_name", circonus_client::DEFAULT_APP_NAME)?
            .set_default("tag_category", circonus_types::DEFAULT_TAG_CATEGORY)?
            .set_default("timeout", "10s")?;

        Ok(with_file(builder, path)
            .add_source(env)
            .build()?
            .try_deserialize()?)
    }

    /// The API token, which must be present and non-blank.
    pub fn token(&self) -> Result<&str, SettingsError> {
        self.api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(SettingsError::MissingToken)
    }

    pub fn timeout(&self) -> Result<Duration, SettingsError> {
        timeout_from(&self.timeout)
    }
}

/// Settings for `list-raspbian-urls`.
#[derive(Debug, Clone, Deserialize)]
pub struct RaspbianSettings {
    pub mirror: String,
    pub dist: String,
    pub component: String,
    pub arch: String,
    pub timeout: String,
}

impl RaspbianSettings {
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, Environment::with_prefix(RASPBIAN_ENV_PREFIX))
    }

    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .set_default("mirror", DEFAULT_MIRROR)?
            .set_default("dist", "stretch")?
            .set_default("component", "main")?
            .set_default("arch", "armhf")?
            .set_default("timeout", "60s")?;

        Ok(with_file(builder, path)
            .add_source(env)
            .build()?
            .try_deserialize()?)
    }

    /// Mirror base URL without a trailing slash.
    pub fn mirror(&self) -> &str {
        self.mirror.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Result<Duration, SettingsError> {
        timeout_from(&self.timeout)
    }
}

fn with_file(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    match path {
        Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml).required(true)),
        None => builder,
    }
}

fn timeout_from(value: &str) -> Result<Duration, SettingsError> {
    parse_duration(value).map_err(|e| SettingsError::Invalid {
        key: "timeout",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    fn env(vars: &[(&str, &str)], prefix: &str) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(prefix).source(Some(map))
    }

    #[test]
    fn test_circonus_defaults() {
        let settings = CirconusSettings::load_with_env(None, env(&[], "CIRCONUS")).unwrap();
        assert_eq!(settings.api_url, "https://api.circonus.com/v2");
        assert_eq!(settings.app_name, "goestools");
        assert_eq!(settings.tag_category, "goestools");
        assert_eq!(settings.timeout().unwrap(), Duration::from_secs(10));
        assert!(matches!(settings.token(), Err(SettingsError::MissingToken)));
    }

    #[test]
    fn test_circonus_token_from_environment() {
        let settings = CirconusSettings::load_with_env(
            None,
            env(&[("CIRCONUS_API_TOKEN", "from-env")], "CIRCONUS"),
        )
        .unwrap();
        assert_eq!(settings.token().unwrap(), "from-env");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "api_token = \"from-file\"\ntag_category = \"rooftop\"\ntimeout = \"3s\""
        )
        .unwrap();

        let settings = CirconusSettings::load_with_env(
            Some(file.path()),
            env(&[("CIRCONUS_API_TOKEN", "from-env")], "CIRCONUS"),
        )
        .unwrap();
        assert_eq!(settings.token().unwrap(), "from-env");
        assert_eq!(settings.tag_category, "rooftop");
        assert_eq!(settings.timeout().unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = CirconusSettings::load_with_env(
            Some(Path::new("/nonexistent/goestools.toml")),
            env(&[], "CIRCONUS"),
        );
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }

    #[test]
    fn test_config_file_is_toml_whatever_the_extension() {
        for suffix in [".conf", ""] {
            let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
            writeln!(file, "api_token = \"from-file\"\napi_url = \"http://circonus.local/v2\"").unwrap();

            let settings =
                CirconusSettings::load_with_env(Some(file.path()), env(&[], "CIRCONUS")).unwrap();
            assert_eq!(settings.token().unwrap(), "from-file");
            assert_eq!(settings.api_url, "http://circonus.local/v2");
        }

        let mut file = Builder::new().suffix(".conf").tempfile().unwrap();
        writeln!(file, "dist = \"buster\"").unwrap();
        let settings =
            RaspbianSettings::load_with_env(Some(file.path()), env(&[], "RASPBIAN")).unwrap();
        assert_eq!(settings.dist, "buster");
    }

    #[test]
    fn test_raspbian_defaults_and_overrides() {
        let settings = RaspbianSettings::load_with_env(None, env(&[], "RASPBIAN")).unwrap();
        assert_eq!(settings.mirror(), DEFAULT_MIRROR);
        assert_eq!(settings.dist, "stretch");
        assert_eq!(settings.component, "main");
        assert_eq!(settings.arch, "armhf");

        let settings = RaspbianSettings::load_with_env(
            None,
            env(
                &[("RASPBIAN_DIST", "buster"), ("RASPBIAN_MIRROR", "http://m.local/r/")],
                "RASPBIAN",
            ),
        )
        .unwrap();
        assert_eq!(settings.dist, "buster");
        assert_eq!(settings.mirror(), "http://m.local/r");
    }

    #[test]
    fn test_invalid_timeout() {
        let settings = RaspbianSettings::load_with_env(
            None,
            env(&[("RASPBIAN_TIMEOUT", "soon")], "RASPBIAN"),
        )
        .unwrap();
        assert!(matches!(
            settings.timeout(),
            Err(SettingsError::Invalid { key: "timeout", .. })
        ));
    }
}
