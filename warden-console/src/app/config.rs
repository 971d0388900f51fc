//! Console configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, a TOML
//! file, the process environment (with `.env` support), then command line
//! flags.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_CONFIG_PATH: &str = "WARDEN_CONFIG";
pub const ENV_SERVER_URL: &str = "WARDEN_SERVER_URL";
pub const ENV_API_TOKEN: &str = "WARDEN_API_TOKEN";
pub const ENV_USE_STUBS: &str = "WARDEN_USE_STUBS";
pub const ENV_REQUEST_TIMEOUT: &str = "WARDEN_REQUEST_TIMEOUT";

const DEFAULT_CONFIG_CANDIDATES: &[&str] = &["warden.toml", "config/warden.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid server url `{value}`: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported server url scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    #[error("invalid request timeout `{value}`: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Command line flags for the console binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "warden-console", about = "Manage the users of a Warden deployment")]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the user-management service
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Run against in-memory stub services instead of a server
    #[arg(long)]
    pub stubs: bool,
}

/// On-disk representation; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub api_token: Option<String>,
    pub use_test_stubs: Option<bool>,
    /// Humantime duration such as `15s` or `1m`
    pub request_timeout: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    server_url: Arc<str>,
    api_token: Option<Arc<str>>,
    use_test_stubs: bool,
    request_timeout: Duration,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_url", &self.server_url)
            .field("has_api_token", &self.api_token.is_some())
            .field("use_test_stubs", &self.use_test_stubs)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl AppConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: Arc::from(server_url.into()),
            api_token: None,
            use_test_stubs: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from every source for the running binary.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let env = |key: &str| std::env::var(key).ok();

        let file = match Self::config_path(args, &env) {
            Some(path) => {
                log::info!("Reading console config from {}", path.display());
                Some(Self::load_file(&path)?)
            }
            None => None,
        };

        Self::resolve(args, file, env)
    }

    /// Merge all layers. `env` is the variable lookup, injectable for tests.
    pub fn resolve<F>(args: &CliArgs, file: Option<FileConfig>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let server_url = args
            .server_url
            .clone()
            .or_else(|| non_empty(ENV_SERVER_URL))
            .or(file.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = normalize_server_url(&server_url)?;

        let api_token = non_empty(ENV_API_TOKEN)
            .or(file.api_token)
            .map(Arc::from);

        let env_stubs = non_empty(ENV_USE_STUBS).and_then(|raw| {
            let parsed = parse_flag(&raw);
            if parsed.is_none() {
                log::warn!("Ignoring unrecognised {ENV_USE_STUBS} value `{raw}`");
            }
            parsed
        });
        let use_test_stubs =
            args.stubs || env_stubs.or(file.use_test_stubs).unwrap_or(false);

        let request_timeout = match non_empty(ENV_REQUEST_TIMEOUT).or(file.request_timeout) {
            Some(raw) => humantime::parse_duration(raw.trim())
                .map_err(|source| ConfigError::InvalidTimeout { value: raw, source })?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            server_url: Arc::from(server_url),
            api_token,
            use_test_stubs,
            request_timeout,
        })
    }

    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn config_path<F>(args: &CliArgs, env: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        args.config
            .clone()
            .or_else(|| env(ENV_CONFIG_PATH).map(PathBuf::from))
            .or_else(Self::find_default_file)
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn use_test_stubs(&self) -> bool {
        self.use_test_stubs
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Arc::from(token.into()));
        self
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize_server_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
        value: trimmed.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = AppConfig::resolve(&CliArgs::default(), None, env_from(&[])).unwrap();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.api_token(), None);
        assert!(!config.use_test_stubs());
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let file = FileConfig {
            server_url: Some("http://file:1".into()),
            api_token: Some("file-token".into()),
            use_test_stubs: Some(false),
            request_timeout: Some("5s".into()),
        };
        let env = env_from(&[
            (ENV_SERVER_URL, "http://env:2/"),
            (ENV_USE_STUBS, "yes"),
            (ENV_REQUEST_TIMEOUT, "1m"),
        ]);

        let config = AppConfig::resolve(&CliArgs::default(), Some(file.clone()), &env).unwrap();
        assert_eq!(config.server_url(), "http://env:2");
        assert_eq!(config.api_token(), Some("file-token"));
        assert!(config.use_test_stubs());
        assert_eq!(config.request_timeout(), Duration::from_secs(60));

        let args = CliArgs {
            server_url: Some("https://cli:3".into()),
            ..CliArgs::default()
        };
        let config = AppConfig::resolve(&args, Some(file), &env).unwrap();
        assert_eq!(config.server_url(), "https://cli:3");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let args = CliArgs {
            server_url: Some("ftp://example.com".into()),
            ..CliArgs::default()
        };
        let err = AppConfig::resolve(&args, None, env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn rejects_garbage_timeout() {
        let env = env_from(&[(ENV_REQUEST_TIMEOUT, "soon")]);
        let err = AppConfig::resolve(&CliArgs::default(), None, env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn unrecognised_stub_flag_falls_back_to_file() {
        let file = FileConfig {
            use_test_stubs: Some(true),
            ..FileConfig::default()
        };
        let env = env_from(&[(ENV_USE_STUBS, "maybe")]);
        let config = AppConfig::resolve(&CliArgs::default(), Some(file), env).unwrap();
        assert!(config.use_test_stubs());
    }

    #[test]
    fn debug_output_hides_token() {
        let config = AppConfig::default().with_api_token("s3cret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("has_api_token: true"));
    }

    #[test]
    fn parse_flag_variants() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
