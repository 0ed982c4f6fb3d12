//! Line accumulator for modulefile text.

use crate::RenderedModule;

/// Fluent API for assembling a module line by line.
///
/// # Example
///
/// ```
/// use modgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("#%Module")
///     .push_blank()
///     .push_line("prepend-path PATH $install_dir/bin");
/// let module = builder.build();
///
/// assert_eq!(module.to_string(), "#%Module\n\nprepend-path PATH $install_dir/bin\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    lines: Vec<String>,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line (a newline is added on output).
    pub fn push_line(&mut self, s: impl Into<String>) -> &mut Self {
        self.lines.push(s.into());
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Whether the last line pushed is blank.
    pub fn ends_with_blank(&self) -> bool {
        self.lines.last().is_some_and(|l| l.is_empty())
    }

    pub fn build(self) -> RenderedModule {
        RenderedModule::new(self.lines)
    }
}
