use std::fmt;

/// Finished modulefile text.
///
/// Written verbatim: every line followed by a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    lines: Vec<String>,
}

impl RenderedModule {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for RenderedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
