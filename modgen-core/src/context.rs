//! Resolved description of one installation.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use tracing::debug;

use crate::{Dialect, Error, Result};

/// Path segment that separates an install prefix from the module name.
pub const INSTALL_MARKER: &str = "/install/";

/// What happens to `install_dir` when the module name is derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallDirPolicy {
    /// Keep the full path as given.
    #[default]
    Keep,
    /// Truncate to the portion before `/install/`.
    BeforeInstall,
    /// Truncate to the portion up to and including the `install` segment.
    ThroughInstall,
}

impl InstallDirPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallDirPolicy::Keep => "keep",
            InstallDirPolicy::BeforeInstall => "before-install",
            InstallDirPolicy::ThroughInstall => "through-install",
        }
    }
}

impl fmt::Display for InstallDirPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstallDirPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keep" => Ok(InstallDirPolicy::Keep),
            "before-install" => Ok(InstallDirPolicy::BeforeInstall),
            "through-install" => Ok(InstallDirPolicy::ThroughInstall),
            _ => Err(format!(
                "unknown install dir policy '{}', expected 'keep', 'before-install' or 'through-install'",
                s
            )),
        }
    }
}

/// Everything the statement builder needs to know about an installation.
///
/// `install_dir` never ends with `/` and `module_name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationContext {
    install_dir: String,
    module_name: String,
    dialect: Dialect,
}

impl InstallationContext {
    /// Resolve an installation from raw inputs.
    ///
    /// When `module_name` is `None` it is derived from `install_dir` by
    /// splitting on the first `/install/`; `policy` then decides whether
    /// `install_dir` itself is rewritten.
    pub fn resolve(
        install_dir: &str,
        module_name: Option<&str>,
        dialect: Dialect,
        policy: InstallDirPolicy,
    ) -> Result<Self> {
        let install_dir = strip_trailing_slash(install_dir);
        if install_dir.is_empty() {
            return Err(Box::new(Error::EmptyInstallDir));
        }

        let (install_dir, module_name) = match module_name {
            Some(name) => (install_dir.to_string(), name.to_string()),
            None => {
                let (prefix, name) = derive_module_name(install_dir)?;
                let dir = match policy {
                    InstallDirPolicy::Keep => install_dir.to_string(),
                    InstallDirPolicy::BeforeInstall => prefix.to_string(),
                    InstallDirPolicy::ThroughInstall => format!("{}/install", prefix),
                };
                debug!(module_name = name, install_dir = %dir, %policy, "derived module name");
                (dir, name.to_string())
            }
        };

        if module_name.trim_matches('/').is_empty() {
            return Err(Box::new(Error::EmptyModuleName));
        }

        Ok(Self {
            install_dir,
            module_name,
            dialect,
        })
    }

    pub fn install_dir(&self) -> &str {
        &self.install_dir
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// First `/`-delimited segment of the module name.
    pub fn package_name(&self) -> &str {
        self.module_name
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
    }

    pub fn package_name_upper(&self) -> String {
        self.package_name().to_uppercase()
    }

    /// Name of the variable pointing at a bundled CMake module directory,
    /// e.g. `MY_PKG_MODULE_PATH` for package `my-pkg`.
    pub fn cmake_module_var(&self) -> String {
        format!("{}_MODULE_PATH", self.package_name_upper().replace('-', "_"))
    }
}

/// Split `install_dir` on the first `/install/`.
///
/// Returns the prefix before the marker and the module name after it.
pub fn derive_module_name(install_dir: &str) -> Result<(&str, &str)> {
    install_dir.split_once(INSTALL_MARKER).ok_or_else(|| {
        Box::new(Error::CannotDeriveModuleName {
            install_dir: install_dir.to_string(),
        })
    })
}

fn strip_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" if !path.is_empty() => "/",
        stripped => stripped,
    }
}
