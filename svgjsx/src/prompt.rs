//! Interactive confirmation.

use std::io::IsTerminal;

use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result, bail};

/// Ask a yes/no question, defaulting to no.
///
/// `assume_yes` answers without asking. Without a terminal to ask on, the
/// question cannot be answered and the operation is refused.
pub(crate) fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        bail!("{} (pass --yes to answer yes without a prompt)", question);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(false)
        .interact()
        .wrap_err("Failed to read confirmation")
}
