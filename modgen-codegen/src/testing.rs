//! Test utilities for directive building.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::DirLister;

/// In-memory [`DirLister`].
///
/// Directories that were never added behave as missing.
#[derive(Debug, Clone, Default)]
pub struct FakeLister {
    dirs: HashMap<PathBuf, Vec<String>>,
}

impl FakeLister {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a directory containing `files`.
    pub fn with_dir<I, S>(mut self, dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs
            .insert(dir.into(), files.into_iter().map(Into::into).collect());
        self
    }
}

impl DirLister for FakeLister {
    fn files(&self, dir: &Path) -> Option<Vec<String>> {
        self.dirs.get(dir).cloned()
    }
}

/// A throwaway `<root>/install/<package>/<version>` tree plus a
/// modulefiles root, removed on drop.
#[cfg(feature = "testing")]
pub struct InstallTree {
    temp: tempfile::TempDir,
    package: String,
    version: String,
}

#[cfg(feature = "testing")]
impl InstallTree {
    pub fn new(package: &str, version: &str) -> std::io::Result<Self> {
        let tree = Self {
            temp: tempfile::TempDir::new()?,
            package: package.to_string(),
            version: version.to_string(),
        };
        std::fs::create_dir_all(tree.install_dir())?;
        Ok(tree)
    }

    /// Drop a CMake descriptor into `<install_dir>/<package>/`.
    pub fn with_cmake_module(self, file_name: &str) -> std::io::Result<Self> {
        let dir = self.install_dir().join(&self.package);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(file_name), "")?;
        Ok(self)
    }

    pub fn install_dir(&self) -> PathBuf {
        self.temp
            .path()
            .join("install")
            .join(&self.package)
            .join(&self.version)
    }

    pub fn modulefiles(&self) -> PathBuf {
        self.temp.path().join("modulefiles")
    }
}
