use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const DEFAULT_GAME: &str = "dota2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory endpoint override; the built-in Huomao URL when unset.
    pub endpoint: Option<String>,
    /// Game category used when none is given on the command line.
    pub game: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Player command invoked with the playlist path; the platform opener
    /// when unset.
    pub player: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            game: DEFAULT_GAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            player: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the defaults; an unreadable
    /// or malformed file is a config error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("huomao").join("config.toml"))
    }
}
