//! Host families that need different library search variables.

use std::{fmt, str::FromStr};

/// Host family a modulefile is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS and the other Apple targets
    Darwin,
    /// Linux and every other Unix-like host
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_vendor = "apple") {
            Platform::Darwin
        } else {
            Platform::Linux
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
        }
    }

    /// Variable consulted by the dynamic loader.
    ///
    /// On Darwin `DYLD_LIBRARY_PATH` is searched before a binary's own
    /// rpaths, which breaks installs that rely on them. The fallback variable
    /// is searched after, matching `LD_LIBRARY_PATH` ordering elsewhere.
    pub fn library_path_var(&self) -> &'static str {
        match self {
            Platform::Darwin => "DYLD_FALLBACK_LIBRARY_PATH",
            Platform::Linux => "LD_LIBRARY_PATH",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            _ => Err(format!(
                "unknown platform '{}', expected 'darwin' or 'linux'",
                s
            )),
        }
    }
}
