use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for modgen-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("malformed extra variable '{arg}'")]
    #[diagnostic(
        code(modgen::malformed_extra_var),
        help("{reason}. Extra variables take the form NAME=VALUE, e.g. -e HIP_DIR=install_dir")
    )]
    MalformedExtraVar { arg: String, reason: String },

    #[error("cannot derive a module name from '{install_dir}'")]
    #[diagnostic(
        code(modgen::cannot_derive_module_name),
        help(
            "install_dir must contain '/install/' to auto-generate module_name, or pass the module name explicitly"
        )
    )]
    CannotDeriveModuleName { install_dir: String },

    #[error("module name must not be empty")]
    #[diagnostic(
        code(modgen::empty_module_name),
        help("pass a name such as 'cuda/versions/10.1.234'")
    )]
    EmptyModuleName,

    #[error("install directory must not be empty")]
    #[diagnostic(code(modgen::empty_install_dir))]
    EmptyInstallDir,

    #[error("cannot determine the home directory")]
    #[diagnostic(
        code(modgen::no_home),
        help("pass --modulefiles <path> or set MODGEN_MODULEFILES")
    )]
    HomeDirUnavailable,

    #[error("failed to read '{path}'")]
    #[diagnostic(code(modgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(modgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(modgen::config_parse))]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a malformed extra variable error
    pub fn malformed_extra(arg: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedExtraVar {
            arg: arg.into(),
            reason: reason.into(),
        })
    }
}
