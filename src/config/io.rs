use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::errors::ConfigError;
use super::types::AppConfig;

/// File name of the settings file inside the `.folio` directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load and normalize configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map(AppConfig::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Record `location` as the resume point in the default config file.
pub fn save_last_location(location: &str) -> Result<(), ConfigError> {
    save_last_location_to_path(location, &config_path()?)
}

/// Rewrite only the `last_location` key of the file at `path`.
///
/// Other keys are kept as written, including values that
/// [`AppConfig::normalized`] would clamp or drop on load.
pub fn save_last_location_to_path(location: &str, path: &Path) -> Result<(), ConfigError> {
    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse::<toml::Table>()
            .map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?
    } else {
        toml::Table::new()
    };
    table.insert(
        "last_location".to_string(),
        toml::Value::String(location.to_string()),
    );
    let data = toml::to_string_pretty(&table).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    write_config_file(path, data.as_bytes())
}

/// Persist configuration to the default location.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save configuration to a specific path, creating parent directories as needed.
///
/// The file is written to a sibling temp file and renamed over the target so
/// a crash never leaves a truncated config behind.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    write_config_file(path, data.as_bytes())
}

fn write_config_file(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let dir = path.parent().ok_or_else(|| ConfigError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other("config path has no parent directory"),
    })?;
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    atomic_write(path, data)
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let tmp_path = path.with_file_name(format!("{file_name}.tmp-{:08x}", rand::random::<u32>()));
    let write_err = |source| ConfigError::Write {
        path: tmp_path.clone(),
        source,
    };

    let result = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        });
    if let Err(err) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(err));
    }
    if let Err(source) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(ConfigError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
