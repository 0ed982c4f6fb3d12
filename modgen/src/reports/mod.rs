//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod generate;
mod output;
mod preview;

pub use generate::{GenerateReport, Outcome};
#[cfg(test)]
pub use output::CaptureOutput;
pub use output::{Output, Report, TerminalOutput};
pub use preview::PreviewReport;
