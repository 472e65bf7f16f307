//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PortalConfig};

pub const CONFIG_ENV: &str = "MLGMS_CONFIG";
pub const API_URL_ENV: &str = "MLGMS_API_URL";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config` or `MLGMS_CONFIG`; must exist.
    Explicit(PathBuf),
    /// The per-user default location; may be absent.
    Default(PathBuf),
    /// No config directory could be determined.
    Builtin,
}

/// Pick the configuration file: `--config`, then `MLGMS_CONFIG`, then
/// `<config dir>/mlgms/config.toml`.
pub fn resolve_config_source(explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(path));
    }
    match dirs::config_dir() {
        Some(dir) => ConfigSource::Default(dir.join("mlgms").join("config.toml")),
        None => ConfigSource::Builtin,
    }
}

/// Load, apply environment overrides and validate.
pub fn load_config(explicit: Option<&Path>) -> Result<PortalConfig, AppError> {
    let mut config = match resolve_config_source(explicit) {
        ConfigSource::Explicit(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            read_config_file(&path)?
        }
        ConfigSource::Default(path) if path.exists() => read_config_file(&path)?,
        ConfigSource::Default(_) | ConfigSource::Builtin => PortalConfig::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        config.api.base_url = url;
    }

    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<PortalConfig, AppError> {
    tracing::debug!(path = %path.display(), "Loading configuration");
    let content = fs::read_to_string(path)?;
    let config: PortalConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PortalConfig, AppError> {
    let config: PortalConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    struct EnvVarGuard {
        key: &'static str,
        original: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let original = std::env::var_os(key);
            unsafe { std::env::set_var(key, value) };
            Self { key, original }
        }

        fn remove(key: &'static str) -> Self {
            let original = std::env::var_os(key);
            unsafe { std::env::remove_var(key) };
            Self { key, original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.original.as_ref() {
                Some(original) => unsafe { std::env::set_var(self.key, original) },
                None => unsafe { std::env::remove_var(self.key) },
            }
        }
    }

    #[test]
    fn parses_full_config() {
        let config = parse_config_content(
            r#"
[api]
base_url = "https://portal.example.org/api"
timeout_secs = 15

[session]
dir = "/var/lib/mlgms"

[moderation]
refetch_on_settle = true
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://portal.example.org/api");
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.session.dir, Some(PathBuf::from("/var/lib/mlgms")));
        assert!(config.moderation.refetch_on_settle);
    }

    #[test]
    fn empty_content_yields_defaults() {
        assert_eq!(parse_config_content("").unwrap(), PortalConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config_content("[api]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    #[serial]
    fn explicit_path_must_exist() {
        let _api = EnvVarGuard::remove(API_URL_ENV);
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial]
    fn env_config_path_is_used() {
        let _api = EnvVarGuard::remove(API_URL_ENV);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portal.toml");
        fs::write(&path, "[api]\nbase_url = \"http://10.0.0.5:5000/api\"\n").unwrap();
        let _config = EnvVarGuard::set(CONFIG_ENV, &path);

        assert_eq!(resolve_config_source(None), ConfigSource::Explicit(path.clone()));
        assert_eq!(load_config(None).unwrap().api.base_url, "http://10.0.0.5:5000/api");
    }

    #[test]
    #[serial]
    fn api_url_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portal.toml");
        fs::write(&path, "[api]\nbase_url = \"http://10.0.0.5:5000/api\"\n").unwrap();
        let _api = EnvVarGuard::set(API_URL_ENV, "http://override:8080/api");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "http://override:8080/api");
    }
}
