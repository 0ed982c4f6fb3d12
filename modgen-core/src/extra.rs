//! Caller-supplied environment variables and prerequisites.

use std::fmt;

use crate::{Error, Result};

/// Literal value that stands for the resolved install directory.
pub const INSTALL_DIR_TOKEN: &str = "install_dir";

/// Value bound to an extra environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraValue {
    /// Emitted verbatim as a quoted string.
    Literal(String),
    /// Emitted as a reference to the install directory variable.
    InstallDir,
}

/// An additional environment variable requested with `--extra NAME=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraVar {
    pub name: String,
    pub value: ExtraValue,
}

impl ExtraVar {
    /// Parse a `NAME=VALUE` argument.
    ///
    /// The argument must contain exactly one `=` and a non-empty name.
    pub fn parse(arg: &str) -> Result<Self> {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| Error::malformed_extra(arg, "missing '='"))?;

        if value.contains('=') {
            return Err(Error::malformed_extra(arg, "more than one '='"));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::malformed_extra(arg, "variable name is empty"));
        }

        let value = if value == INSTALL_DIR_TOKEN {
            ExtraValue::InstallDir
        } else {
            ExtraValue::Literal(value.to_string())
        };

        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

/// A module that must be loaded before the generated one.
///
/// Names are opaque and kept verbatim; order and duplicates are preserved
/// by whoever collects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisite(String);

impl Prerequisite {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Prerequisite {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Prerequisite {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
