//! Dialect renderers.
//!
//! A renderer maps each [`Directive`] to one line of concrete syntax. The
//! shared [`DialectRenderer::render`] adds the file header and the blank
//! line that separates declarations from path prepends.

mod lua;
mod tcl;

pub use lua::Lua;
use modgen_core::Dialect;
pub use tcl::Tcl;

use crate::{CodeBuilder, Directive, RenderedModule};

/// Name of the variable holding the install directory in both dialects.
pub const INSTALL_DIR_VAR: &str = "install_dir";

/// Trait for dialect-specific modulefile syntax.
pub trait DialectRenderer {
    fn dialect(&self) -> Dialect;

    /// First line of every module in this dialect.
    fn header(&self) -> &'static str;

    /// Render a single directive.
    fn directive(&self, directive: &Directive) -> String;

    /// Render a full directive sequence.
    fn render(&self, directives: &[Directive]) -> RenderedModule {
        let mut builder = CodeBuilder::new();
        builder.push_line(self.header());

        let mut in_prepends = false;
        for directive in directives {
            if directive.is_prepend_path() && !in_prepends {
                in_prepends = true;
                if !builder.ends_with_blank() {
                    builder.push_blank();
                }
            }
            builder.push_line(self.directive(directive));
        }

        builder.build()
    }
}

/// Get the renderer for a dialect.
pub fn renderer_for(dialect: Dialect) -> &'static dyn DialectRenderer {
    match dialect {
        Dialect::Tcl => &Tcl,
        Dialect::Lua => &Lua,
    }
}

/// Render `directives` in `dialect`.
pub fn render(directives: &[Directive], dialect: Dialect) -> RenderedModule {
    renderer_for(dialect).render(directives)
}
