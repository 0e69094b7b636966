use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rolodex_core::DEFAULT_SEARCH_DEBOUNCE;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_SEED_TIMEOUT_SECS: u64 = 30;
pub const MAX_SEED_TIMEOUT_SECS: u64 = 300;
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: SeedConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub enabled: bool,
    pub url: String,
    pub timeout_secs: u64,
}

impl SeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SeedConfig {
                enabled: true,
                url: DEFAULT_SEED_URL.to_string(),
                timeout_secs: DEFAULT_SEED_TIMEOUT_SECS,
            },
            search: SearchConfig {
                debounce_ms: DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64,
            },
            ui: UiConfig {
                theme: Theme::default(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid seed.url value: {0}")]
    InvalidSeedUrl(String),
    #[error("invalid seed.timeout_secs value: {0} (expected 1..={MAX_SEED_TIMEOUT_SECS})")]
    InvalidSeedTimeout(u64),
    #[error("invalid search.debounce_ms value: {0} (expected 0..={MAX_DEBOUNCE_MS})")]
    InvalidDebounce(u64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    seed: Option<SeedFile>,
    search: Option<SearchFile>,
    ui: Option<UiFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    enabled: Option<bool>,
    url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchFile {
    debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UiFile {
    theme: Option<Theme>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(seed) = parsed.seed {
        if let Some(enabled) = seed.enabled {
            config.seed.enabled = enabled;
        }
        if let Some(url) = seed.url {
            config.seed.url = validate_seed_url(&url)?;
        }
        if let Some(timeout) = seed.timeout_secs {
            if timeout == 0 || timeout > MAX_SEED_TIMEOUT_SECS {
                return Err(ConfigError::InvalidSeedTimeout(timeout));
            }
            config.seed.timeout_secs = timeout;
        }
    }

    if let Some(search) = parsed.search {
        if let Some(debounce_ms) = search.debounce_ms {
            if debounce_ms > MAX_DEBOUNCE_MS {
                return Err(ConfigError::InvalidDebounce(debounce_ms));
            }
            config.search.debounce_ms = debounce_ms;
        }
    }

    if let Some(ui) = parsed.ui {
        if let Some(theme) = ui.theme {
            config.ui.theme = theme;
        }
    }

    Ok(config)
}

fn validate_seed_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed =
        Url::parse(trimmed).map_err(|_| ConfigError::InvalidSeedUrl(raw.to_string()))?;
    let has_host = matches!(parsed.host_str(), Some(host) if !host.is_empty());
    if !matches!(parsed.scheme(), "http" | "https") || !has_host {
        return Err(ConfigError::InvalidSeedUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
