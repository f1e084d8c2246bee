//! Configuration loading.
//!
//! Settings resolve in three layers: built-in defaults, then an optional
//! config file (TOML, YAML or JSON), then environment variables. An explicit
//! `--config` path must load or the command fails; a discovered file that
//! fails to parse only logs a warning and falls back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Origins allowed by default: the hosted frontend plus common dev servers.
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "https://iamrlz.github.io",
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Basenames probed during config discovery, in priority order.
const CONFIG_BASENAMES: [&str; 2] = ["bondcheck", "config"];
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Upper bound on a whole multipart upload body.
    pub max_upload_bytes: usize,
    /// CORS allowlist. Empty means permissive.
    pub allowed_origins: Vec<String>,
    /// Config file the values came from, if any.
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            config_file: None,
        }
    }
}

/// On-disk configuration. Every field is optional; missing ones keep their
/// defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_bytes: Option<usize>,
    pub allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load a config file, dispatching the parser on its extension.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let config = match ext.as_str() {
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML in {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            other => bail!("Unsupported config file extension: {:?}", other),
        };
        Ok(config)
    }
}

/// Look for a config file in the current directory.
fn find_config_file() -> Option<PathBuf> {
    for base in CONFIG_BASENAMES {
        for ext in CONFIG_EXTENSIONS {
            let candidate = PathBuf::from(format!("{base}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Split a comma separated origin list, dropping empty entries.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve settings from defaults, an optional config file and the
/// environment, in that order.
///
/// `PORT` follows the deployment convention; the remaining variables are
/// prefixed `BONDCHECK_`.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let config = match config_path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            settings.config_file = Some(path.to_path_buf());
            Some(config)
        }
        None => match find_config_file() {
            Some(path) => match Config::load_from_path(&path) {
                Ok(config) => {
                    settings.config_file = Some(path);
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable config file: {:#}", e);
                    None
                }
            },
            None => None,
        },
    };

    if let Some(config) = config {
        if let Some(host) = config.host {
            settings.host = host;
        }
        if let Some(port) = config.port {
            settings.port = port;
        }
        if let Some(max) = config.max_upload_bytes {
            settings.max_upload_bytes = max;
        }
        if let Some(origins) = config.allowed_origins {
            settings.allowed_origins = origins;
        }
    }

    if let Some(host) = env_nonempty("BONDCHECK_HOST") {
        settings.host = host;
    }
    if let Some(port) = env_nonempty("PORT") {
        settings.port = port
            .parse()
            .with_context(|| format!("Invalid PORT value: {port}"))?;
    }
    if let Some(max) = env_nonempty("BONDCHECK_MAX_UPLOAD_BYTES") {
        settings.max_upload_bytes = max
            .parse()
            .with_context(|| format!("Invalid BONDCHECK_MAX_UPLOAD_BYTES value: {max}"))?;
    }
    if let Some(origins) = env_nonempty("BONDCHECK_ALLOWED_ORIGINS") {
        settings.allowed_origins = parse_origin_list(&origins);
    }

    Ok(settings)
}
