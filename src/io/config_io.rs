use std::fs;
use std::path::{Path, PathBuf};

use crate::io::json_store::atomic_write;
use crate::model::config::AppConfig;

/// Name of the config file inside the data directory
pub const CONFIG_FILE: &str = "makeitso.toml";

/// Data directory used when none is given on the command line
pub const DEFAULT_DATA_DIR: &str = ".makeitso";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse makeitso.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Read the config from a data directory. A missing file means defaults.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

const CONFIG_TEMPLATE: &str = r##"# makeitso configuration

[store]
# Document holding tasks and todo items, relative to this directory
file = "store.json"

[account]
# Owner recorded on new todo items
owner = "{owner}"

[display]
# chrono strftime patterns for due dates and times
date_format = "%a, %-d %b %Y"
time_format = "%H:%M"
"##;

/// Write a commented default config, refusing to clobber unless `force`.
pub fn init_config(data_dir: &Path, owner: &str, force: bool) -> Result<PathBuf, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path));
    }
    let owner = owner.replace('\\', "\\\\").replace('"', "\\\"");
    let text = CONFIG_TEMPLATE.replace("{owner}", &owner);
    atomic_write(&path, text.as_bytes()).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// Path of the store document for a data directory and its config
pub fn store_path(data_dir: &Path, config: &AppConfig) -> PathBuf {
    data_dir.join(&config.store.file)
}
