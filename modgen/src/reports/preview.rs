//! Preview shown before confirmation.

use std::path::Path;

use super::output::{Output, Report};

/// Everything the operator sees before deciding whether to write.
#[derive(Debug)]
pub struct PreviewReport<'a> {
    pub module_name: &'a str,
    pub modulefiles: &'a Path,
    pub target: &'a Path,
    pub content: &'a str,
}

impl Report for PreviewReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "Generating modulefile {} in {}",
            self.module_name,
            self.modulefiles.display()
        ));
        out.preformatted(&format!(
            "The module can be loaded by running: module load {}",
            self.module_name
        ));
        out.newline();
        out.section(&format!("Modulefile contents ({})", self.target.display()));
        out.rule();
        out.preformatted(self.content.trim_end_matches('\n'));
        out.rule();
    }
}
