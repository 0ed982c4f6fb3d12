//! Statement builder: turns a resolved installation into directives.

use std::path::Path;

use modgen_core::{ExtraVar, InstallationContext, Prerequisite};
use tracing::{debug, trace};

use crate::{Directive, EnvValue, Platform};

/// Suffix identifying a CMake package/module descriptor.
pub const CMAKE_SUFFIX: &str = ".cmake";

/// Read-only view of directory contents.
pub trait DirLister {
    /// Names of the regular files directly inside `dir`.
    ///
    /// Returns `None` when `dir` does not exist, is not a directory, or
    /// cannot be read.
    fn files(&self, dir: &Path) -> Option<Vec<String>>;
}

/// [`DirLister`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn files(&self, dir: &Path) -> Option<Vec<String>> {
        if !dir.is_dir() {
            return None;
        }
        let entries = std::fs::read_dir(dir).ok()?;
        Some(
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .collect(),
        )
    }
}

static FS_LISTER: FsLister = FsLister;

/// Builds the ordered directive sequence for one installation.
///
/// Emission order: prerequisites, install dir, extra variables, package
/// variables, CMake module path (if detected), then path prepends.
pub struct StatementBuilder<'a> {
    ctx: &'a InstallationContext,
    platform: Platform,
    lister: &'a dyn DirLister,
}

impl<'a> StatementBuilder<'a> {
    /// Create a builder probing the real filesystem for the current platform.
    pub fn new(ctx: &'a InstallationContext) -> Self {
        Self {
            ctx,
            platform: Platform::current(),
            lister: &FS_LISTER,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_lister(mut self, lister: &'a dyn DirLister) -> Self {
        self.lister = lister;
        self
    }

    pub fn build(&self, prereqs: &[Prerequisite], extras: &[ExtraVar]) -> Vec<Directive> {
        let mut directives = Vec::new();

        directives.extend(prereqs.iter().map(|p| Directive::prereq(p.name())));
        directives.push(Directive::SetInstallDir(self.ctx.install_dir().to_string()));
        directives.extend(
            extras
                .iter()
                .map(|extra| Directive::set_env(&extra.name, extra.value.clone().into())),
        );
        directives.extend(self.package_vars());
        directives.extend(self.cmake_module_path());
        directives.extend(self.path_prepends());

        debug!(
            module = self.ctx.module_name(),
            count = directives.len(),
            platform = %self.platform,
            "built directives"
        );
        directives
    }

    /// `<pkg>_PATH`, `<pkg>_ROOT`, `<pkg>_DIR` and their upper-cased forms.
    fn package_vars(&self) -> Vec<Directive> {
        let package = self.ctx.package_name();
        let upper = self.ctx.package_name_upper();

        [package, upper.as_str()]
            .into_iter()
            .flat_map(|prefix| {
                ["PATH", "ROOT", "DIR"]
                    .into_iter()
                    .map(move |key| {
                        Directive::set_env(format!("{prefix}_{key}"), EnvValue::InstallDir)
                    })
            })
            .collect()
    }

    /// Detect `<install_dir>/<package>/*.cmake`.
    fn cmake_module_path(&self) -> Option<Directive> {
        let package = self.ctx.package_name();
        let dir = Path::new(self.ctx.install_dir()).join(package);

        let files = self.lister.files(&dir)?;
        let found = files.iter().any(|name| name.ends_with(CMAKE_SUFFIX));
        trace!(dir = %dir.display(), found, "probed for cmake modules");
        if !found {
            return None;
        }

        Some(Directive::set_env(
            self.ctx.cmake_module_var(),
            EnvValue::InstallSubdir(package.to_string()),
        ))
    }

    fn path_prepends(&self) -> Vec<Directive> {
        let lib_var = self.platform.library_path_var();

        [
            ("PATH", "bin"),
            (lib_var, "lib"),
            (lib_var, "lib64"),
            ("LIBRARY_PATH", "lib"),
            ("LIBRARY_PATH", "lib64"),
            ("CPATH", "include"),
            ("PKG_CONFIG_PATH", "lib/pkgconfig"),
            ("CMAKE_PREFIX_PATH", "lib/cmake"),
        ]
        .into_iter()
        .map(|(var, suffix)| Directive::prepend_path(var, suffix))
        .collect()
    }
}
