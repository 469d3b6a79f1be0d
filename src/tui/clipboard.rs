//! Clipboard helper for copying passenger records
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::model::Passenger;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy a passenger to the system clipboard as pretty-printed JSON
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_passenger(passenger: &Passenger) -> Result<()> {
    let json =
        serde_json::to_string_pretty(passenger).context("Failed to serialize passenger")?;
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(json)
        .context("Failed to set clipboard text")?;
    Ok(())
}
