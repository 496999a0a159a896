//! Where the bridge looks for `config.toml`, and seeding it on first run.

use arkit_common::ConfigError;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable naming a config file to use instead of the
/// platform default.
pub const CONFIG_PATH_ENV: &str = "ARKIT_BRIDGE_CONFIG";

const APP_DIR: &str = "arkit-bridge";
const FILE_NAME: &str = "config.toml";

/// `config.toml` under the bridge's directory inside `base`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// A non-empty env override wins; otherwise the file lives under `base`.
fn resolve(env_override: Option<OsString>, base: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        debug!("config path from {CONFIG_PATH_ENV}: {}", path.display());
        return Ok(path);
    }
    base.map(|b| config_path_in(&b)).ok_or_else(|| {
        ConfigError::ParseError(format!(
            "no platform config directory; set {CONFIG_PATH_ENV} to a config file"
        ))
    })
}

/// The config file the bridge reads when no `--config` is given.
///
/// `$ARKIT_BRIDGE_CONFIG` if set, else `arkit-bridge/config.toml` in the
/// platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

/// Seed `path` with the commented default config.
///
/// Returns `false` without touching anything when a file is already there,
/// so a racing first run never clobbers a config the user just wrote.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create directory for", e))?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(false);
        }
        Err(e) => return Err(io_err("cannot create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("cannot write default config to", e))?;

    info!("created default config at {}", path.display());
    Ok(true)
}
