//! Directive building and dialect rendering for modgen.
//!
//! # Module Organization
//!
//! - [`Directive`] - dialect-independent modulefile statements
//! - [`StatementBuilder`] - turns an installation into an ordered directive list
//! - [`renderer`] - TCL and Lua syntax ([`DialectRenderer`])
//! - [`testing`] - Test utilities (feature-gated)

mod builder;
mod code_builder;
mod directive;
mod platform;
mod rendered;
pub mod renderer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CMAKE_SUFFIX, DirLister, FsLister, StatementBuilder};
pub use code_builder::CodeBuilder;
pub use directive::{Directive, EnvValue};
pub use platform::Platform;
pub use rendered::RenderedModule;
pub use renderer::{DialectRenderer, Lua, Tcl, render, renderer_for};
