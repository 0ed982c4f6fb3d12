use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Dialect, Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written(PathBuf),
    /// Nothing written, a file already exists at the target
    AlreadyExists(PathBuf),
    /// Nothing written, the target's parent directory is a regular file
    ParentIsFile(PathBuf),
}

/// A modulefile to be written below a modulefiles root.
///
/// Existing files are never overwritten.
#[derive(Debug, Clone)]
pub struct ModuleFile {
    path: PathBuf,
    content: String,
}

impl ModuleFile {
    /// Create a modulefile for `module_name` below `root`.
    ///
    /// The target is `<root>/<module_name>`, with `.lua` appended for the Lua
    /// dialect. Surrounding slashes on the module name are dropped.
    pub fn new(
        root: impl AsRef<Path>,
        module_name: &str,
        dialect: Dialect,
        content: impl Into<String>,
    ) -> Self {
        Self {
            path: target_path(root.as_ref(), module_name, dialect),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file unless something is already in the way.
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            debug!(path = %self.path.display(), "target exists, not overwriting");
            return Ok(WriteResult::AlreadyExists(self.path.clone()));
        }

        if let Some(parent) = self.path.parent() {
            if parent.is_file() {
                debug!(parent = %parent.display(), "parent is a regular file");
                return Ok(WriteResult::ParentIsFile(parent.to_path_buf()));
            }
        }

        write_file(&self.path, &self.content)?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote modulefile");
        Ok(WriteResult::Written(self.path.clone()))
    }
}

fn target_path(root: &Path, module_name: &str, dialect: Dialect) -> PathBuf {
    let path = root.join(module_name.trim_matches('/'));
    match dialect.file_extension() {
        Some(ext) => {
            // Version-like names ("1.2.3") must keep their dots, so append rather
            // than replace the extension.
            let mut name = path.into_os_string();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        }
        None => path,
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| {
        Box::new(Error::Write {
            path: path.to_path_buf(),
            source,
        })
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)?;
    Ok(())
}
