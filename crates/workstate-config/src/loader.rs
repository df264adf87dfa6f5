use crate::error::{ConfigError, ConfigResult};
use crate::schema::WorkstateConfig;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "WORKSTATE_";

/// Supported file formats for configuration
#[derive(Debug, Clone, PartialEq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect file format from extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }
}

/// Builds a [`WorkstateConfig`] from defaults, an optional file and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then `path` if given, then `WORKSTATE_*` variables from the
    /// process env, validated
    pub fn load(path: Option<&Path>) -> ConfigResult<WorkstateConfig> {
        let config = Self::resolve(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`ConfigLoader::load`] but leaves validation to the caller, who
    /// may still fold command-line overrides in first
    pub fn resolve(path: Option<&Path>) -> ConfigResult<WorkstateConfig> {
        Self::resolve_with_env(path, std::env::vars())
    }

    pub fn resolve_with_env<I>(path: Option<&Path>, vars: I) -> ConfigResult<WorkstateConfig>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => WorkstateConfig::default(),
        };
        Self::apply_env_overrides(&mut config, vars)?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<WorkstateConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let format = FileFormat::from_path(path)?;
        tracing::debug!(path = %path.display(), ?format, "loading configuration file");
        Self::parse_content(&content, format)
    }

    pub fn parse_content(content: &str, format: FileFormat) -> ConfigResult<WorkstateConfig> {
        let config = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Apply `WORKSTATE_*` overrides. Unrelated variables are ignored.
    pub fn apply_env_overrides<I>(config: &mut WorkstateConfig, vars: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            let Some(key) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match key {
                "ADDR" => config.server.addr = value,
                "SECRET" => config.auth.secret = value,
                "ALGORITHM" => config.auth.algorithm = value,
                "DEFAULT_TOKEN_TTL_MINUTES" => {
                    config.auth.default_token_ttl_minutes = parse_env(&name, &value)?
                }
                "LOGIN_TOKEN_TTL_MINUTES" => {
                    config.auth.login_token_ttl_minutes = parse_env(&name, &value)?
                }
                "HASH_ROUNDS" => config.auth.hash_rounds = parse_env(&name, &value)?,
                _ => continue,
            }
            tracing::debug!(variable = %name, "configuration overridden from environment");
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> ConfigResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name: name.to_string(), value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path("a.yml").unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path("a.json").unwrap(), FileFormat::Json);
        assert!(matches!(FileFormat::from_path("a.toml"), Err(ConfigError::UnsupportedFormat(_))));
        assert!(FileFormat::from_path("noext").is_err());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = ConfigLoader::parse_content(
            "auth:\n  secret: from-file\n  login_token_ttl_minutes: 60\n",
            FileFormat::Yaml,
        )
        .unwrap();
        assert_eq!(cfg.auth.secret, "from-file");
        assert_eq!(cfg.auth.login_token_ttl_minutes, 60);
        assert_eq!(cfg.auth.default_token_ttl_minutes, 15);
        assert_eq!(cfg.server.addr, "127.0.0.1:8000");
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = ConfigLoader::parse_content(r#"{"auth": {"secrett": "x"}}"#, FileFormat::Json);
        assert!(matches!(err, Err(ConfigError::Json(_))));
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  addr: 0.0.0.0:9000\nauth:\n  secret: file-secret").unwrap();

        let mut cfg = ConfigLoader::load_from_file(file.path()).unwrap();
        ConfigLoader::apply_env_overrides(
            &mut cfg,
            vars(&[
                ("WORKSTATE_SECRET", "env-secret"),
                ("WORKSTATE_HASH_ROUNDS", "500"),
                ("WORKSTATE_UNKNOWN", "ignored"),
                ("PATH", "/usr/bin"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.server.addr, "0.0.0.0:9000");
        assert_eq!(cfg.auth.secret, "env-secret");
        assert_eq!(cfg.auth.hash_rounds, 500);
        cfg.validate().unwrap();
    }

    #[test]
    fn resolve_defers_validation() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "auth:\n  secret: file-secret").unwrap();

        let mut cfg = ConfigLoader::resolve_with_env(
            Some(file.path()),
            vars(&[("WORKSTATE_ADDR", "not-an-addr")]),
        )
        .unwrap();
        assert_eq!(cfg.server.addr, "not-an-addr");
        assert!(cfg.validate().is_err());

        cfg.server.addr = "127.0.0.1:9100".to_string();
        cfg.validate().unwrap();
        assert_eq!(cfg.auth.secret, "file-secret");
    }

    #[test]
    fn malformed_env_number_rejected() {
        let mut cfg = WorkstateConfig::default();
        let err = ConfigLoader::apply_env_overrides(
            &mut cfg,
            vars(&[("WORKSTATE_LOGIN_TOKEN_TTL_MINUTES", "thirty")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }
}
