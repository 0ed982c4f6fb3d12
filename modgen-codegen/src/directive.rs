//! Dialect-independent modulefile statements.

use modgen_core::ExtraValue;

/// Value bound by a [`Directive::SetEnv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// A literal string.
    Literal(String),
    /// The install directory itself.
    InstallDir,
    /// A path below the install directory, e.g. `foo` for `$install_dir/foo`.
    InstallSubdir(String),
}

impl From<ExtraValue> for EnvValue {
    fn from(value: ExtraValue) -> Self {
        match value {
            ExtraValue::Literal(s) => EnvValue::Literal(s),
            ExtraValue::InstallDir => EnvValue::InstallDir,
        }
    }
}

/// One statement of a modulefile.
///
/// A module is an ordered sequence of directives; order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Declare a module that must be loaded first.
    Prerequisite(String),
    /// Bind the install directory variable every later statement refers to.
    SetInstallDir(String),
    /// Set an environment variable.
    SetEnv { name: String, value: EnvValue },
    /// Prepend `$install_dir/<suffix>` to a path-like variable.
    PrependPath { var: String, suffix: String },
}

impl Directive {
    pub fn prereq(name: impl Into<String>) -> Self {
        Self::Prerequisite(name.into())
    }

    pub fn set_env(name: impl Into<String>, value: EnvValue) -> Self {
        Self::SetEnv {
            name: name.into(),
            value,
        }
    }

    pub fn prepend_path(var: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::PrependPath {
            var: var.into(),
            suffix: suffix.into(),
        }
    }

    pub fn is_prepend_path(&self) -> bool {
        matches!(self, Self::PrependPath { .. })
    }
}
