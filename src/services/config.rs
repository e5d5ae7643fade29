use crate::domain::constants::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_TYPE, DEFAULT_ORIENTATION, DEFAULT_PER_PAGE,
};
use crate::domain::models::{ConfigFile, EffectiveConfig};
use crate::services::source::SearchFilters;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("HOME is not set; pass --config explicitly")]
    NoHome,
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Values given on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source: Option<String>,
    pub api_key: Option<String>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub source: String,
    pub api_key: Option<String>,
    pub filters: SearchFilters,
    pub per_page: u32,
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".config/pixseek/config.toml"))
}

pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Flag/env first, then the config file, then built-in defaults.
pub fn resolve(path: PathBuf, file: ConfigFile, overrides: Overrides) -> Settings {
    let api = file.api;
    Settings {
        config_path: path,
        source: overrides
            .source
            .or(api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        api_key: overrides.api_key.or(api.key),
        filters: SearchFilters {
            image_type: api
                .image_type
                .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string()),
            orientation: api
                .orientation
                .unwrap_or_else(|| DEFAULT_ORIENTATION.to_string()),
            safesearch: api.safesearch.unwrap_or(true),
        },
        per_page: overrides
            .per_page
            .or(api.per_page)
            .unwrap_or(DEFAULT_PER_PAGE)
            .max(1),
    }
}

pub fn load_settings(path: Option<&Path>, overrides: Overrides) -> Result<Settings, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let file = load_config_file(&path)?;
    tracing::debug!(path = %path.display(), "config resolved");
    Ok(resolve(path, file, overrides))
}

impl Settings {
    pub fn effective(&self) -> EffectiveConfig {
        EffectiveConfig {
            config_path: self.config_path.display().to_string(),
            source: self.source.clone(),
            api_key: match &self.api_key {
                Some(k) if !k.is_empty() => "<redacted>".to_string(),
                _ => "<unset>".to_string(),
            },
            image_type: self.filters.image_type.clone(),
            orientation: self.filters.orientation.clone(),
            safesearch: self.filters.safesearch,
            per_page: self.per_page,
        }
    }
}
