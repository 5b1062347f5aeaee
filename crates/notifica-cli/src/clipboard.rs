//! Clipboard boundary.
//!
//! Clipboard access can fail on headless or restricted environments; callers
//! report the error and keep going.

use anyhow::{Context, Result};

/// Copy text to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("could not open the system clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("could not write to the system clipboard")?;
    Ok(())
}
