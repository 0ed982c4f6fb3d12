//! Core types for the modgen modulefile generator.
//!
//! This crate resolves an installation (install directory, module name,
//! dialect), parses caller-supplied variables and prerequisites, and writes
//! finished modulefiles without clobbering existing ones.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod context;
mod dialect;
mod error;
mod extra;
mod file;

pub use config::{Config, default_modulefiles_dir};
pub use context::{INSTALL_MARKER, InstallDirPolicy, InstallationContext, derive_module_name};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use extra::{ExtraValue, ExtraVar, INSTALL_DIR_TOKEN, Prerequisite};
pub use file::{ModuleFile, WriteResult};
