//! Operator confirmation before anything touches the disk.

use dialoguer::theme::ColorfulTheme;
use eyre::{Context, Result};

/// Asks whether to go ahead with a write.
///
/// `Ok(false)` means the operator declined or cancelled.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Single-keypress terminal prompt; Enter accepts, Esc or `q` cancels.
pub struct InteractiveConfirm;

impl Confirm for InteractiveConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact_opt()
            .wrap_err("Failed to read confirmation (pass --yes when not running in a terminal)")?;

        Ok(answer.unwrap_or(false))
    }
}

/// Accepts without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
