//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a horizontal rule.
    fn rule(&mut self);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn rule(&mut self) {
        println!("{}", "-".repeat(40));
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output that records everything into a string.
#[cfg(test)]
#[derive(Default)]
pub struct CaptureOutput {
    pub text: String,
}

#[cfg(test)]
impl Output for CaptureOutput {
    fn section(&mut self, name: &str) {
        self.text.push_str(&format!("{}:\n", name));
    }

    fn rule(&mut self) {
        self.text.push_str(&"-".repeat(40));
        self.text.push('\n');
    }

    fn preformatted(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn warning(&mut self, msg: &str) {
        self.text.push_str(&format!("warning: {}\n", msg));
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }
}
