//! Optional defaults file.
//!
//! ```toml
//! modulefiles = "/shared/modulefiles"
//! dialect = "lua"
//! install_dir_policy = "keep"
//! prereqs = ["gcc/12.2.0"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Dialect, Error, InstallDirPolicy, Result};

/// Defaults applied beneath command-line flags and environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directory that modulefiles are written below
    pub modulefiles: Option<PathBuf>,
    /// Dialect used when no flag selects one
    pub dialect: Option<Dialect>,
    /// Rewrite policy for derived module names
    pub install_dir_policy: Option<InstallDirPolicy>,
    /// Prerequisites emitted ahead of those given on the command line
    #[serde(default)]
    pub prereqs: Vec<String>,
}

impl Config {
    /// Open and parse a defaults file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse defaults from TOML source, naming `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    /// Load the defaults file.
    ///
    /// An explicit path must exist. Otherwise `<config dir>/modgen/config.toml`
    /// is used when present, and built-in defaults when it is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::open(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading config");
                Self::open(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Conventional location of the defaults file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modgen").join("config.toml"))
    }
}

/// `<home>/modulefiles`
pub fn default_modulefiles_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("modulefiles"))
        .ok_or_else(|| Box::new(Error::HomeDirUnavailable))
}
