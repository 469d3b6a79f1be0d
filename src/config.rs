// Configuration for the passenger viewer
//
// Configuration is loaded in order of precedence:
// 1. Command-line flags (highest priority, applied by the caller)
// 2. Environment variables
// 3. Config file (~/.config/titanic-viewer/config.toml)
// 4. Built-in defaults (lowest priority)

use crate::client::ClientConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    /// Parse rotation string from config, falling back to daily
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON logs to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Prefix for log file names ("titanic-viewer" -> "titanic-viewer.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "titanic-viewer".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the passenger API
    pub base_url: String,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// Color theme: "dark" or "light"
    pub theme: String,

    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_rotation: Option<String>,
    file_prefix: Option<String>,
}

/// Config file structure
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    theme: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

/// Quoted and escaped TOML string literal
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Get the config file path: ~/.config/titanic-viewer/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("titanic-viewer").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let template = r#"# titanic-viewer configuration
# Uncomment and modify options as needed

# Passenger API base URL (env: TITANIC_VIEWER_URL)
# base_url = "http://localhost:8000"

# Request timeout in seconds (env: TITANIC_VIEWER_TIMEOUT)
# timeout_secs = 30

# Theme: dark, light (env: TITANIC_VIEWER_THEME)
# theme = "dark"

# Logging configuration
# [logging]
# level = "info"                # trace, debug, info, warn, error (RUST_LOG overrides this)
# file_enabled = false          # Write JSON logs to rotating files
# file_dir = "./logs"
# file_rotation = "daily"       # hourly, daily, never
# file_prefix = "titanic-viewer"
"#;

        let _ = std::fs::write(&path, template);
    }

    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(),
        }
    }

    fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# titanic-viewer configuration

# Passenger API base URL
base_url = {base_url}

# Request timeout in seconds
timeout_secs = {timeout}

# Theme: dark, light
theme = {theme}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = {level}
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = {rotation}
file_prefix = {prefix}
"#,
            base_url = toml_string(&self.base_url),
            timeout = self.timeout_secs,
            theme = toml_string(&self.theme),
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            rotation = toml_string(self.logging.file_rotation.as_str()),
            prefix = toml_string(&self.logging.file_prefix),
        )
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge file values and environment lookups over the defaults
    fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = env("TITANIC_VIEWER_URL")
            .or(file.base_url)
            .unwrap_or(defaults.base_url);

        let timeout_secs = env("TITANIC_VIEWER_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(defaults.timeout_secs);

        let theme = env("TITANIC_VIEWER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // RUST_LOG is handled when the subscriber is built
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_rotation: file_logging
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.logging.file_rotation),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
        };

        Self {
            base_url,
            timeout_secs,
            theme,
            logging,
        }
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// Written config must parse back into the same values
    #[test]
    fn test_to_toml_roundtrip() {
        let mut config = Config::default();
        config.base_url = "http://titanic.example:9000".to_string();
        config.timeout_secs = 5;
        config.logging.file_enabled = true;
        config.logging.file_rotation = LogRotation::Hourly;

        let file = Config::parse_file_config(&config.to_toml()).unwrap();
        let parsed = Config::resolve(file, no_env);

        assert_eq!(parsed.base_url, "http://titanic.example:9000");
        assert_eq!(parsed.timeout_secs, 5);
        assert!(parsed.logging.file_enabled);
        assert_eq!(parsed.logging.file_rotation, LogRotation::Hourly);
    }

    #[test]
    fn test_to_toml_escapes_strings() {
        let mut config = Config::default();
        config.logging.file_dir = PathBuf::from(r#"C:\Users\jack "dawson"\logs"#);
        config.logging.file_prefix = "titanic\tviewer".to_string();

        let file = Config::parse_file_config(&config.to_toml()).unwrap();
        let parsed = Config::resolve(file, no_env);

        assert_eq!(parsed.logging.file_dir, config.logging.file_dir);
        assert_eq!(parsed.logging.file_prefix, "titanic\tviewer");
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::resolve(FileConfig::default(), no_env);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = Config::parse_file_config(
            r#"
base_url = "http://from-file:8000"
timeout_secs = 12
"#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            ("TITANIC_VIEWER_URL", "http://from-env:8000"),
            ("TITANIC_VIEWER_TIMEOUT", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://from-env:8000");
        // Unparseable env value falls through to the file
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_partial_logging_section() {
        let file = Config::parse_file_config(
            r#"
[logging]
level = "debug"
file_rotation = "weekly"
"#,
        )
        .unwrap();
        let config = Config::resolve(file, no_env);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_rotation, LogRotation::Daily);
        assert_eq!(config.logging.file_prefix, "titanic-viewer");
    }

    #[test]
    fn test_client_config_timeout() {
        let config = Config {
            timeout_secs: 7,
            ..Config::default()
        };
        assert_eq!(config.client_config().timeout, Duration::from_secs(7));
    }
}
